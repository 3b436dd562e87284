pub mod client;
pub mod user;

pub use client::PostgresClientProvider;
pub use user::PostgresUserProvider;
