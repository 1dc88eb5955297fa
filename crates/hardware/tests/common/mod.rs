
/// Program harness around [`rvseq_core::Simulator`].
pub mod harness;
