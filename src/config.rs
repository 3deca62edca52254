/// Service configuration, fixed in source
///
/// The bind address is compiled in. Nothing is read from the environment
/// or the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub service_host: String,
    pub service_port: u16,
}

const SERVICE_HOST: &str = "0.0.0.0";
const SERVICE_PORT: u16 = 3000;

impl Config {
    pub fn fixed() -> Self {
        Config {
            service_host: SERVICE_HOST.to_string(),
            service_port: SERVICE_PORT,
        }
    }

    /// Address handed to the TCP listener, e.g. "0.0.0.0:3000"
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Greeting route: GET {}", crate::routes::ROOT);
        tracing::info!(
            "  Service listening on: {}:{}",
            self.service_host,
            self.service_port
        );
    }
}
