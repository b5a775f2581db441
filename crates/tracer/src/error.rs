use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// The alpha channel never crossed the threshold anywhere, so the scan
    /// produced no regions and there is no geometry to emit. Retrying with
    /// the same inputs fails identically; the host decides whether to fall
    /// back to a plain quad.
    EmptySilhouette,
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySilhouette => write!(f, "no opaque silhouette found in image"),
        }
    }
}

impl std::error::Error for TraceError {}
