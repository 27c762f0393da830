// Adapters layer: concrete implementations of the domain ports (caller verification, calculation history).

pub mod history;
pub mod jwt;

pub use history::{InMemoryHistory, NoopRecorder};
pub use jwt::{Claims, JwtVerifier};
