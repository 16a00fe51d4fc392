//! Admin view: everything the public dashboard shows plus recent bookings and
//! pending approvals, behind the role-gated route. The gate is a UX guard;
//! the backend enforces the real authorization.

use crate::features::stats::client;
use crate::routes::dashboard::StatsGrid;
use albergue_auth::ProtectedRoute;
use albergue_ui::{Alert, AlertKind, Card, CardContent, CardHeader, CardTitle, Spinner};
use leptos::prelude::*;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <div class="container mx-auto p-6">
            <ProtectedRoute required_role="admin">
                <AdminDashboard />
            </ProtectedRoute>
        </div>
    }
}

#[component]
fn AdminDashboard() -> impl IntoView {
    let summary = LocalResource::new(move || async move { client::fetch_summary().await });

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"Admin Dashboard"</h1>
            <Suspense fallback=move || view! {
                <div class="flex justify-center py-12">
                    <Spinner />
                </div>
            }>
                {move || match summary.get() {
                    Some(Ok(summary)) => {
                        let bookings = summary.recent_bookings.clone();
                        let pending = summary.pending_approvals;
                        view! {
                            <StatsGrid stats=summary.stats />
                            <div class="grid gap-4 md:grid-cols-2">
                                <Card>
                                    <CardHeader>
                                        <CardTitle>"Recent Bookings"</CardTitle>
                                    </CardHeader>
                                    <CardContent>
                                        <table class="min-w-full divide-y divide-gray-200 text-sm">
                                            <thead>
                                                <tr class="text-left text-xs uppercase tracking-wider text-gray-500">
                                                    <th class="py-2 pr-4">"Guest"</th>
                                                    <th class="py-2 pr-4">"Stay"</th>
                                                    <th class="py-2">"Status"</th>
                                                </tr>
                                            </thead>
                                            <tbody class="divide-y divide-gray-200">
                                                <For
                                                    each=move || bookings.clone()
                                                    key=|booking| booking.id.clone()
                                                    children=|booking| {
                                                        view! {
                                                            <tr>
                                                                <td class="py-2 pr-4 font-medium text-gray-900">
                                                                    {booking.guest_name}
                                                                </td>
                                                                <td class="py-2 pr-4 text-gray-500">
                                                                    {format!(
                                                                        "{} → {}",
                                                                        booking.check_in_date,
                                                                        booking.check_out_date,
                                                                    )}
                                                                </td>
                                                                <td class="py-2">
                                                                    <span class=booking.status.badge_class()>
                                                                        {booking.status.label()}
                                                                    </span>
                                                                </td>
                                                            </tr>
                                                        }
                                                    }
                                                />
                                            </tbody>
                                        </table>
                                    </CardContent>
                                </Card>
                                <Card>
                                    <CardHeader>
                                        <CardTitle>"Pending Approvals"</CardTitle>
                                    </CardHeader>
                                    <CardContent>
                                        <div class="text-2xl font-bold text-gray-900">{pending}</div>
                                        <p class="mt-1 text-sm text-gray-500">
                                            "Registrations waiting for review."
                                        </p>
                                    </CardContent>
                                </Card>
                            </div>
                        }
                        .into_any()
                    }
                    Some(Err(err)) => view! {
                        <Alert kind=AlertKind::Error message=err.to_string() />
                    }
                    .into_any(),
                    None => view! {
                        <div class="flex justify-center py-12">
                            <Spinner />
                        </div>
                    }
                    .into_any(),
                }}
            </Suspense>
        </div>
    }
}
