use http::{Method, Uri};
use pathway_core::conf::load_config;
use pathway_core::ctx::{RequestCtx, ResponseCtx};
use pathway_core::device::builtin::CleanPathDevice;
use pathway_core::device::core::{Device, DevicePipeline, DeviceRegistry, DeviceResult};
use pathway_core::route::Router;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

/// In-process stand-in for the embedding gateway.
///
/// Drives one request the way a server's request flow would: hydrate a
/// fresh context, run the device pipeline, then match the router. Tests
/// read the returned [`Handled`] to see exactly what a downstream handler
/// would have observed.
pub struct TestGateway {
    devices: Vec<Arc<dyn Device>>,
    router: Router,
}

/// What the downstream side of the pipeline observed for one request.
pub struct Handled {
    /// The context as the handler would receive it.
    pub ctx: RequestCtx,

    /// Upstream of the matched route, if routing ran and found one.
    pub upstream: Option<String>,

    /// Set when a device short-circuited before routing.
    pub short_circuit: Option<ResponseCtx>,
}

impl TestGateway {
    pub fn new(devices: Vec<Arc<dyn Device>>, router: Router) -> Self {
        Self { devices, router }
    }

    /// The common fixture: a CleanPath device in front of the given router.
    pub fn with_clean_path(router: Router) -> Self {
        Self::new(vec![Arc::new(CleanPathDevice::new())], router)
    }

    /// Build the device chain from a YAML pipeline config, the way the
    /// embedding gateway does at startup.
    pub fn from_config_str(yaml: &str, router: Router) -> anyhow::Result<Self> {
        let mut file = NamedTempFile::new()?;
        file.write_all(yaml.as_bytes())?;

        let config = load_config(file.path())?;
        let mut registry = DeviceRegistry::new();
        registry.load_from_config(&config)?;

        Ok(Self::new(registry.all().to_vec(), router))
    }

    pub fn handle(&self, method: Method, target: &str) -> Handled {
        let uri: Uri = target.parse().expect("invalid test target");
        let mut ctx = RequestCtx::empty();
        ctx.hydrate(method, &uri);

        match DevicePipeline::run_on_request(&self.devices, &mut ctx) {
            DeviceResult::Continue => {}
            DeviceResult::Respond(res) => {
                return Handled {
                    ctx,
                    upstream: None,
                    short_circuit: Some(res),
                };
            }
            DeviceResult::Error(_) => {
                return Handled {
                    ctx,
                    upstream: None,
                    short_circuit: None,
                };
            }
        }

        let upstream = self
            .router
            .match_route(&ctx)
            .ok()
            .map(|route| route.upstream.clone());

        Handled {
            ctx,
            upstream,
            short_circuit: None,
        }
    }

    /// Run the response phase over an already-handled request.
    pub fn respond(&self, res: &mut ResponseCtx) -> DeviceResult {
        DevicePipeline::run_on_response(&self.devices, res)
    }
}
