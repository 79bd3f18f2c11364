//! Timer primitives behind the scheduler: plain sleeps and animation frames.

/// Frame period used where no display refresh is available.
pub const FALLBACK_FRAME_MS: u64 = 16;

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let ms = u32::try_from(ms).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Resolve right before the browser paints the next frame.
#[cfg(target_arch = "wasm32")]
pub async fn next_frame() {
    use futures_channel::oneshot;
    use wasm_bindgen::{closure::Closure, JsCast};

    let Some(window) = web_sys::window() else {
        sleep_ms(FALLBACK_FRAME_MS).await;
        return;
    };

    let (tx, rx) = oneshot::channel::<()>();
    let callback = Closure::once_into_js(move |_timestamp: f64| {
        let _ = tx.send(());
    });

    if window
        .request_animation_frame(callback.unchecked_ref())
        .is_err()
    {
        sleep_ms(FALLBACK_FRAME_MS).await;
        return;
    }
    let _ = rx.await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn next_frame() {
    sleep_ms(FALLBACK_FRAME_MS).await;
}
