//! Engine configuration

/// Default memory bound for the Dial bucket table: 256 MiB of bucket
/// headers, about 11M buckets on 64-bit targets
pub const DEFAULT_MAX_BUCKET_BYTES: usize = 1 << 28;

/// Tuning knobs shared by all engines
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Worker threads for the persistent pool and the wave pool
    pub threads: usize,

    /// Bytes the bucket engine may allocate up front for its bucket table,
    /// counted as one `Vec<usize>` header per distance in `0..=D_max`
    pub max_bucket_bytes: usize,

    /// Wave cap for iterative relaxation; `None` means the vertex count
    pub max_waves: Option<usize>,
}

impl EngineConfig {
    /// Creates a configuration using every available hardware thread
    pub fn new() -> Self {
        EngineConfig {
            threads: num_cpus::get(),
            max_bucket_bytes: DEFAULT_MAX_BUCKET_BYTES,
            max_waves: None,
        }
    }

    /// Set the number of worker threads (zero is treated as one)
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Set the bucket table memory bound in bytes
    pub fn with_max_bucket_bytes(mut self, max_bucket_bytes: usize) -> Self {
        self.max_bucket_bytes = max_bucket_bytes;
        self
    }

    /// Set an explicit wave cap for iterative relaxation
    pub fn with_max_waves(mut self, max_waves: usize) -> Self {
        self.max_waves = Some(max_waves);
        self
    }

    /// Effective worker count
    pub fn worker_count(&self) -> usize {
        self.threads.max(1)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
