pub mod groq;
pub mod request;
