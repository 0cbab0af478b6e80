// Test Helper Modules
//
// Infrastructure shared by the contract, integration, and performance
// suites: a spawner for the in-process reference server, a verifier client
// bound to it, fixture data, and response assertions.
//
// The suites are black-box: everything goes through real HTTP connections
// to a real server, never through handler calls.

pub mod assertions;
pub mod test_server;

pub use assertions::*;
pub use test_data::*;
pub use test_server::*;
