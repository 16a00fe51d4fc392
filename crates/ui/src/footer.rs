use leptos::prelude::*;

/// Site footer. The year comes from the browser clock; rendering happens only
/// on the wasm target.
#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="bg-gray-50">
            <div class="mx-auto max-w-7xl px-4 py-10 sm:px-6 lg:px-8">
                <div class="border-t border-gray-200 pt-6">
                    <p class="text-center text-sm text-gray-400">
                        {format!("© {year} Albergue Municipal Carrascalejo. Todos los derechos reservados.")}
                    </p>
                </div>
            </div>
        </footer>
    }
}
