use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">
                        "Workshift"
                    </h1>
                    <nav class="flex space-x-4">
                        <a href="/shifts" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                            "シフト管理"
                        </a>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center py-12" role="status" aria-label="読み込み中">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

/// Page shell shared by every route: header plus a constrained main column.
#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                {children()}
            </main>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_links_to_shift_page() {
        let html = render_to_string(|| view! { <Header/> });
        assert!(html.contains("href=\"/shifts\""));
        assert!(html.contains("シフト管理"));
    }

    #[test]
    fn page_shell_wraps_children_in_main() {
        let html = render_to_string(|| {
            view! { <PageShell><p>"中身"</p></PageShell> }
        });
        assert!(html.contains("<main"));
        assert!(html.contains("中身"));
    }
}
