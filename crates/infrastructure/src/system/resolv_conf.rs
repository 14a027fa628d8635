use dnsdrone_domain::ConfigError;
use std::net::{IpAddr, Ipv6Addr, SocketAddr, SocketAddrV6};
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

const DNS_PORT: u16 = 53;

/// Nameserver entries of resolv.conf(5), on the DNS port.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvConf {
    pub nameservers: Vec<SocketAddr>,
}

impl ResolvConf {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path)
                .await
                .map_err(|e| ConfigError::ResolverConfigRead {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;

        let conf = Self::parse(&content);
        if conf.nameservers.is_empty() {
            return Err(ConfigError::ResolverConfigMalformed {
                path: path.display().to_string(),
                reason: "no usable nameserver entries".to_string(),
            });
        }

        debug!(
            path = %path.display(),
            nameservers = conf.nameservers.len(),
            "Resolver configuration loaded"
        );
        Ok(conf)
    }

    /// Parses resolv.conf content. Other keywords and invalid entries are
    /// ignored, as the C library does.
    pub fn parse(content: &str) -> Self {
        let mut conf = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            let mut fields = line.split_whitespace();
            if fields.next() != Some("nameserver") {
                continue;
            }

            match fields.next().map(Self::parse_nameserver) {
                Some(Some(addr)) => conf.nameservers.push(addr),
                _ => warn!(line, "Ignoring invalid nameserver entry"),
            }
        }

        conf
    }

    /// Address of the first nameserver.
    pub fn primary_nameserver(&self) -> Option<SocketAddr> {
        self.nameservers.first().copied()
    }

    /// A `%zone` suffix is only accepted as a numeric scope id on a
    /// link-local IPv6 address.
    fn parse_nameserver(raw: &str) -> Option<SocketAddr> {
        let Some((ip, zone)) = raw.split_once('%') else {
            let ip: IpAddr = raw.parse().ok()?;
            return Some(SocketAddr::new(ip, DNS_PORT));
        };

        let ip: Ipv6Addr = ip.parse().ok()?;
        if !ip.is_unicast_link_local() {
            return None;
        }
        let scope_id: u32 = zone.parse().ok()?;
        Some(SocketAddr::V6(SocketAddrV6::new(ip, DNS_PORT, 0, scope_id)))
    }
}
