/// Ports module defining the interfaces of the hexagonal architecture
///
/// Only driven (outbound) ports exist: the graph builder and the report use
/// case call out through them to resolvers, serializers, the console and the
/// filesystem.
pub mod outbound;
