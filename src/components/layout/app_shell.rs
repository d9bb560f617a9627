//! Shared layout wrapper with navigation and content container. It
//! centralizes header markup so routes can focus on content. Navigation is
//! client-side only; the API enforces access control on its own.

use crate::app_lib::build_info::git_commit_hash;
use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps routes with a header, main content container, and build footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let link_class = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0";

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href="/"
                        {..}
                        class="flex items-center space-x-3"
                    >
                        <span class="font-semibold whitespace-nowrap">"Accounts"</span>
                    </A>
                    <ul class="font-medium flex flex-row space-x-8">
                        <li>
                            <A href="/signup" {..} class=link_class>
                                "Sign Up"
                            </A>
                        </li>
                        <li>
                            <A href="/login" {..} class=link_class>
                                "Login"
                            </A>
                        </li>
                        <li>
                            <A href="/profile" {..} class=link_class>
                                "Profile"
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
            <footer class="p-4 text-center text-xs text-gray-400">
                {format!("accounts-web {}", git_commit_hash())}
            </footer>
        </div>
    }
}
