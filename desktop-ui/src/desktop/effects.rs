use dioxus::prelude::{Signal, WritableExt};
use gloo_timers::future::TimeoutFuture;

use crate::desktop::clock::format_clock;
use crate::interop::{local_utc_offset_minutes, now_ms};

pub async fn tick_clock(mut clock: Signal<String>, refresh_ms: u32) {
    loop {
        clock.set(format_clock(now_ms(), local_utc_offset_minutes()));
        TimeoutFuture::new(refresh_ms.max(1)).await;
    }
}
