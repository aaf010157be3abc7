//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use sensordash_app::{ActiveTab, AppState};
use sensordash_core::{Metric, SecurityEventKind};

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: everything shown comes from the dashboard
/// slots and the two range loaders.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(
        widgets::MainHeader::new(
            &state.settings.server.origin,
            state.dashboard.connection,
            state.active_tab,
        ),
        areas.header,
    );

    match state.active_tab {
        ActiveTab::Live => render_live(frame, state, areas.body),
        ActiveTab::History => render_history(frame, state, areas.body),
    }

    frame.render_widget(widgets::StatusBar::new(state.active_tab), areas.footer);
}

fn render_live(frame: &mut Frame, state: &AppState, body: ratatui::layout::Rect) {
    let slots = &state.dashboard;
    let live = layout::live(body);

    let cards = [
        widgets::ValueCard::metric(slots, Metric::Temperature),
        widgets::ValueCard::metric(slots, Metric::Humidity),
        widgets::ValueCard::motion(slots),
        widgets::ValueCard::smoke(slots),
    ];
    for (card, area) in cards.into_iter().zip(live.cards) {
        frame.render_widget(card, area);
    }

    frame.render_widget(
        widgets::SeriesChart::live(Metric::Temperature, slots.live_chart(Metric::Temperature)),
        live.temperature_chart,
    );
    frame.render_widget(
        widgets::SeriesChart::live(Metric::Humidity, slots.live_chart(Metric::Humidity)),
        live.humidity_chart,
    );

    frame.render_widget(widgets::ReadingsView::new(&slots.table), live.table);
}

fn render_history(frame: &mut Frame, state: &AppState, body: ratatui::layout::Rect) {
    let slots = &state.dashboard;
    let history = layout::history(body);

    frame.render_widget(
        widgets::RangeBar::new("Historical Data", &state.history, "[ ]"),
        history.history_bar,
    );

    for (metric, area) in [
        (Metric::Temperature, history.temperature_chart),
        (Metric::Humidity, history.humidity_chart),
    ] {
        // The last successful load stays on screen while a new one is pending
        match &slots.history {
            Some(series) => {
                let points = match metric {
                    Metric::Temperature => &series.temperature,
                    Metric::Humidity => &series.humidity,
                };
                frame.render_widget(
                    widgets::SeriesChart::historical(metric, series.hours, points),
                    area,
                );
            }
            None => frame.render_widget(widgets::SeriesChart::pending(metric), area),
        }
    }

    frame.render_widget(
        widgets::RangeBar::new("Security Events", &state.security, "{ }"),
        history.security_bar,
    );

    for (kind, area) in [
        (SecurityEventKind::Motion, history.motion_list),
        (SecurityEventKind::Smoke, history.smoke_list),
    ] {
        let events = slots.security.as_ref().map(|list| list.events(kind));
        frame.render_widget(widgets::EventList::new(kind, events), area);
    }
}
