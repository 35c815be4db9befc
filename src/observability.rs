use biometrics::{Collector, Counter, Moments};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("dossier.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("dossier.client.request_errors");
pub(crate) static CLIENT_FALLBACKS: Counter = Counter::new("dossier.client.fallbacks");
pub(crate) static CLIENT_OFFLINE: Counter = Counter::new("dossier.client.offline");
pub(crate) static CLIENT_REQUEST_DURATION: Moments =
    Moments::new("dossier.client.request_duration_seconds");

pub(crate) static TERMINAL_SUBMITS: Counter = Counter::new("dossier.terminal.submits");
pub(crate) static TERMINAL_CLEARS: Counter = Counter::new("dossier.terminal.clears");
pub(crate) static TERMINAL_LOCAL_ACTIONS: Counter = Counter::new("dossier.terminal.local_actions");
pub(crate) static TERMINAL_QUEUED: Counter = Counter::new("dossier.terminal.queued");

pub(crate) static REVEAL_STREAMS: Counter = Counter::new("dossier.reveal.streams");
pub(crate) static REVEAL_CHARS: Counter = Counter::new("dossier.reveal.chars");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);
    collector.register_counter(&CLIENT_FALLBACKS);
    collector.register_counter(&CLIENT_OFFLINE);
    collector.register_moments(&CLIENT_REQUEST_DURATION);

    collector.register_counter(&TERMINAL_SUBMITS);
    collector.register_counter(&TERMINAL_CLEARS);
    collector.register_counter(&TERMINAL_LOCAL_ACTIONS);
    collector.register_counter(&TERMINAL_QUEUED);

    collector.register_counter(&REVEAL_STREAMS);
    collector.register_counter(&REVEAL_CHARS);
}
