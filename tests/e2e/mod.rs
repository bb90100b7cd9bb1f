// End-to-end tests for the speech server API
//
// Each test binds its own server on 127.0.0.1:0 and talks to it over real
// HTTP through a hyper client. Servers share nothing, so tests run in
// parallel.
//
// Contexts:
// - TestContext: default configuration, no synthesis engine (501 path)
// - AuthTestContext: bearer authentication required on /speech
// - EngineTestContext: a recording fake engine that produces audio

mod test_auth;
mod test_synthesis;
