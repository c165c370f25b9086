//! Shared layout wrapper with navigation and content container. The two form
//! routes keep no shared state; the header only links between them.

use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <span class="font-semibold whitespace-nowrap">"User Auth"</span>
                    <ul class="font-medium flex flex-row space-x-8">
                        <li>
                            <A
                                href="/login"
                                {..}
                                class="block py-2 px-3 text-gray-900 rounded hover:text-blue-700"
                            >
                                "Sign In"
                            </A>
                        </li>
                        <li>
                            <A
                                href="/register"
                                {..}
                                class="block py-2 px-3 text-gray-900 rounded hover:text-blue-700"
                            >
                                "Sign Up"
                            </A>
                        </li>
                    </ul>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
        </div>
    }
}
