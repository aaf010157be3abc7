//! Message dispatcher: one raw push frame in, display updates out.

use chrono::{DateTime, Local};

use sensordash_core::prelude::*;
use sensordash_core::{format_value, Metric, ReadingRow, TimestampedPoint};
use sensordash_feed::decode_update;

use crate::live::LiveSeries;
use crate::sink::RenderSink;

/// Apply one raw frame received at `now`.
///
/// Only the fields present in the reading are updated; all chart points of
/// one frame share `now`. A table row is appended whenever the frame carried
/// a reading object. Frames that fail to decode are logged and discarded
/// without touching anything.
///
/// Returns whether a reading was applied.
pub fn dispatch<S>(raw: &str, live: &mut LiveSeries, sink: &mut S, now: DateTime<Local>) -> bool
where
    S: RenderSink + ?Sized,
{
    let update = match decode_update(raw) {
        Ok(Some(update)) => update,
        Ok(None) => {
            debug!("feed: frame carried no reading");
            return false;
        }
        Err(e) => {
            warn!("feed: discarding payload: {}", e);
            return false;
        }
    };

    for metric in Metric::ALL {
        if let Some(value) = update.metric(metric) {
            let text = format_value(value);
            match metric {
                Metric::Temperature => sink.show_temperature(text),
                Metric::Humidity => sink.show_humidity(text),
            }
            live.append(metric, TimestampedPoint::new(now, value), sink);
        }
    }

    if let Some(active) = update.motion_detected {
        sink.show_motion(active);
    }
    if let Some(active) = update.smoke_detected {
        sink.show_smoke(active);
    }

    sink.push_table_row(ReadingRow::from_update(&update, now));
    true
}
