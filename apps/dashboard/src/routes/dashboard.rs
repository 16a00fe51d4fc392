//! Public dashboard: headline statistics, fetched once on mount.

use crate::features::stats::{client, DashboardStats};
use albergue_ui::{Alert, AlertKind, Card, CardContent, CardHeader, CardTitle, Spinner};
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let summary = LocalResource::new(move || async move { client::fetch_summary().await });

    view! {
        <div class="container mx-auto space-y-6 p-6">
            <h1 class="text-3xl font-bold text-gray-900">"Dashboard"</h1>
            <Suspense fallback=move || view! {
                <div class="flex justify-center py-12">
                    <Spinner />
                </div>
            }>
                {move || match summary.get() {
                    Some(Ok(summary)) => view! { <StatsGrid stats=summary.stats /> }.into_any(),
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

/// Four stat tiles, shared with the admin view.
#[component]
pub(crate) fn StatsGrid(stats: DashboardStats) -> impl IntoView {
    let tiles = [
        ("Total Bookings", stats.total_bookings.to_string()),
        ("Total Revenue", format!("€{:.2}", stats.total_revenue)),
        ("Active Bookings", stats.active_bookings.to_string()),
        ("Upcoming Bookings", stats.upcoming_bookings.to_string()),
    ];

    view! {
        <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-4">
            {tiles
                .into_iter()
                .map(|(title, value)| {
                    view! {
                        <Card>
                            <CardHeader>
                                <CardTitle>{title}</CardTitle>
                            </CardHeader>
                            <CardContent>
                                <div class="text-2xl font-bold text-gray-900">{value}</div>
                            </CardContent>
                        </Card>
                    }
                })
                .collect_view()}
        </div>
    }
}
