pub mod server;
pub mod wire;

pub use server::DnsServer;
pub use wire::SinkholePolicy;
