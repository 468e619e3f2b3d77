/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with the filesystem, the console
/// and artifact repositories.
pub mod outbound;
