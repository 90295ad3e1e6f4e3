//! Profiling utilities based on the `puffin` crate.
//!
//! Scopes are always compiled in and cost almost nothing until
//! [`puffin::set_scopes_on`] is called. The HTTP viewer server is only
//! available with the `profiling` feature.

pub use puffin::{GlobalProfiler, profile_function, profile_scope};

#[cfg(feature = "profiling")]
use std::sync::OnceLock;

/// Profiling backend options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingBackend {
    /// Collect scopes in-process only.
    InProcess,
    /// Send profiling data to puffin_viewer via HTTP.
    #[cfg(feature = "profiling")]
    PuffinHttp,
}

#[cfg(feature = "profiling")]
static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

/// Default address for the puffin HTTP server.
#[cfg(feature = "profiling")]
pub const PUFFIN_ADDRESS: &str = "0.0.0.0:8585";

/// Enable profiling with the specified backend.
///
/// # Example
/// ```no_run
/// use dockdrop_core::profiling::{init_profiling, ProfilingBackend};
///
/// init_profiling(ProfilingBackend::InProcess);
/// ```
pub fn init_profiling(backend: ProfilingBackend) {
    puffin::set_scopes_on(true);

    match backend {
        ProfilingBackend::InProcess => {
            tracing::debug!("Puffin scopes enabled (in-process)");
        }
        #[cfg(feature = "profiling")]
        ProfilingBackend::PuffinHttp => match puffin_http::Server::new(PUFFIN_ADDRESS) {
            Ok(server) => {
                tracing::info!("Puffin profiler server started on http://{}", PUFFIN_ADDRESS);

                // Keep the server alive for the rest of the process
                let _ = PROFILING_SERVER.set(server);
            }
            Err(e) => {
                tracing::error!("Failed to start puffin server: {}", e);
            }
        },
    }
}

/// Mark the end of one drag gesture frame.
///
/// Hosts call this once per pointer event so scopes are grouped per event.
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}
