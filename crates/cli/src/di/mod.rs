use dnsdrone_application::ports::{MetricsSink, ProbeResolver};
use dnsdrone_application::use_cases::ExecuteProbeUseCase;
use dnsdrone_domain::{Config, ConfigError};
use dnsdrone_infrastructure::dns::{NameserverResolver, SystemResolver};
use dnsdrone_infrastructure::metrics::ProbeMetrics;
use dnsdrone_infrastructure::system::ResolvConf;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Everything the scheduler and the metrics endpoint share.
pub struct ProbeServices {
    pub metrics: Arc<ProbeMetrics>,
    pub probe: Arc<ExecuteProbeUseCase>,
    /// First nameserver of the resolver configuration, port 53.
    pub nameserver: SocketAddr,
}

impl ProbeServices {
    pub async fn build(config: &Config) -> anyhow::Result<Self> {
        let resolv_conf = ResolvConf::load(&config.probe.resolv_conf).await?;
        let nameserver = resolv_conf.primary_nameserver().ok_or_else(|| {
            ConfigError::ResolverConfigMalformed {
                path: config.probe.resolv_conf.clone(),
                reason: "no usable nameserver entries".to_string(),
            }
        })?;

        let resolver: Arc<dyn ProbeResolver> = if config.probe.local_resolver {
            Arc::new(SystemResolver::new())
        } else {
            Arc::new(NameserverResolver::new(nameserver, config.probe.timeout))
        };
        info!(resolver = %resolver.describe(), "Resolver selected");

        let metrics = Arc::new(ProbeMetrics::new(config.metrics.namespace.as_str()));
        let sink: Arc<dyn MetricsSink> = metrics.clone();
        let probe = Arc::new(ExecuteProbeUseCase::new(resolver, sink));

        Ok(Self {
            metrics,
            probe,
            nameserver,
        })
    }
}
