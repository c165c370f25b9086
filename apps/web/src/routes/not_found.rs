//! Fallback page for unknown routes.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <h1 class="text-6xl font-black text-gray-200 select-none">"404"</h1>
                <p class="mt-2 text-xl font-bold text-gray-900">"Page not found"</p>
                <p class="mt-4 text-gray-500">
                    "Use the links above to sign in or create an account."
                </p>
                <A
                    href="/login"
                    {..}
                    class="mt-6 inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800"
                >
                    "Go to sign in"
                </A>
            </div>
        </AppShell>
    }
}
