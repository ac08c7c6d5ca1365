// End-to-end tests for the webglue HTTP surface
//
// Each test gets its own server bound to an ephemeral port through the
// test-context lifecycle hooks, so tests run in parallel without sharing state.

mod test_health;
mod test_not_found;
