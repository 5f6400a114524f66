//! Paginated instance enumeration and the side-by-side toolset source.

use crate::instance::SetupInstance;
use toolscout_core::{Enumeration, ToolsetSource};
use tracing::debug;

/// Batch size of the instance enumerator's buffer contract.
///
/// The registration service fills caller buffers in groups of three and may
/// report a full fetched-count even when some of the counted slots are null.
pub const INSTANCE_BATCH: usize = 3;

/// Handle to the host's installation-registration service.
pub trait SetupConfiguration {
    /// Request an enumerator over the installed instances.
    ///
    /// `None` when the service cannot produce one; callers treat that the
    /// same as the service being absent altogether.
    fn enum_instances(&self) -> Option<Box<dyn InstanceEnumerator>>;
}

/// Paginated pull over installed instances.
pub trait InstanceEnumerator {
    /// Fill `buf` with up to `buf.len()` instances and return the
    /// fetched-count. A count of zero means the enumeration is finished.
    /// Slots within the counted range may be `None` and must be skipped,
    /// not treated as an error.
    fn next(&mut self, buf: &mut [Option<SetupInstance>]) -> usize;
}

/// Side-by-side installations as a toolset source.
///
/// Reports [`Enumeration::Absent`] when the registration service is not
/// present on this host, when it cannot produce an enumerator, or when
/// enumeration accumulates nothing - downstream merging treats all three
/// identically.
pub struct SideBySideToolsets {
    configuration: Option<Box<dyn SetupConfiguration>>,
}

impl SideBySideToolsets {
    /// Wrap an optionally constructed registration service handle.
    #[must_use]
    pub fn new(configuration: Option<Box<dyn SetupConfiguration>>) -> Self {
        Self { configuration }
    }
}

impl ToolsetSource for SideBySideToolsets {
    fn name(&self) -> &'static str {
        "side-by-side"
    }

    fn enumerate(&self) -> Enumeration {
        let Some(configuration) = &self.configuration else {
            debug!("registration service not present");
            return Enumeration::Absent;
        };
        let Some(mut enumerator) = configuration.enum_instances() else {
            debug!("registration service has no instance enumerator");
            return Enumeration::Absent;
        };

        let mut toolsets = Vec::new();
        loop {
            let mut batch: [Option<SetupInstance>; INSTANCE_BATCH] =
                std::array::from_fn(|_| None);
            let fetched = enumerator.next(&mut batch);
            if fetched == 0 {
                break;
            }
            // The fetched-count covers null slots too; only non-null
            // records make it into the registry.
            for slot in batch.iter_mut().take(fetched) {
                if let Some(instance) = slot.take() {
                    toolsets.push(instance.to_toolset());
                }
            }
        }

        if toolsets.is_empty() {
            debug!("registration service reported no usable instances");
            return Enumeration::Absent;
        }
        Enumeration::Found(toolsets)
    }
}
