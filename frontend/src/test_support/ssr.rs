use leptos::*;

/// Keeps resource loading suppressed for its lifetime, so rendered views
/// show their loading branches deterministically instead of spawning
/// fetches against a backend that is not there.
struct SuppressResources;

impl SuppressResources {
    fn start() -> Self {
        leptos_reactive::suppress_resource_load(true);
        SuppressResources
    }
}

impl Drop for SuppressResources {
    fn drop(&mut self) {
        leptos_reactive::suppress_resource_load(false);
    }
}

/// Runs `f` inside a fresh reactive runtime and disposes it afterwards.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders a view to its server-side HTML string.
pub fn render_to_string<F, N>(view_fn: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let _suppress = SuppressResources::start();
    with_runtime(move || view_fn().into_view().render_to_string().to_string())
}
