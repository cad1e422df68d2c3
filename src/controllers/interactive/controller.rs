use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::errors::render_error::RenderError;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::render_frame::render_frame::{
    RenderFrameError, RenderedFrame, render_frame_cancelable,
};
use log::{debug, warn};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

/// Renders the newest submitted request on a background thread.
///
/// Submitting a request bumps the generation. The worker polls the
/// generation while rendering and abandons its pass as soon as a newer one
/// exists, so only the latest viewport is ever presented.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(presenter_port: Arc<dyn InteractiveControllerPresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Replaces any pending request and returns its generation.
    pub fn submit_request(&self, request: RenderRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);

            if let Some((superseded, _)) = guard.replace((generation, request)) {
                debug!("request {} superseded before it started", superseded);
            }
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("render worker panicked");
            }
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let start = Instant::now();
            let result = Self::render_request(&request, &cancel_token);
            let render_duration = start.elapsed();

            match result {
                Ok(frame) => {
                    let current_gen = shared.generation.load(Ordering::Acquire);

                    if job_generation != current_gen {
                        debug!("dropping stale frame {}", job_generation);
                        continue;
                    }

                    debug!(
                        "frame {} rendered {}x{} raster in {:?}",
                        job_generation,
                        frame.raster_size.width,
                        frame.raster_size.height,
                        render_duration
                    );

                    shared.presenter_port.present(RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        pixel_buffer: frame.pixel_buffer,
                        raster_size: frame.raster_size,
                        render_duration,
                    }));

                    shared
                        .last_completed_generation
                        .store(job_generation, Ordering::Release);
                }
                Err(RenderOutcome::Cancelled) => {
                    debug!("render {} cancelled", job_generation);
                    continue;
                }
                Err(RenderOutcome::Error(message)) => {
                    let current_gen = shared.generation.load(Ordering::Acquire);

                    if job_generation != current_gen {
                        continue;
                    }

                    warn!("render {} failed: {}", job_generation, message);

                    shared
                        .presenter_port
                        .present(RenderEvent::Error(RenderError {
                            generation: job_generation,
                            message,
                        }));

                    shared
                        .last_completed_generation
                        .store(job_generation, Ordering::Release);
                }
            }
        }
    }

    fn render_request<C: CancelToken>(
        request: &RenderRequest,
        cancel: &C,
    ) -> Result<RenderedFrame, RenderOutcome> {
        render_frame_cancelable(&request.viewport, request.surface, cancel).map_err(|e| match e {
            RenderFrameError::Cancelled(_) => RenderOutcome::Cancelled,
            other => RenderOutcome::Error(other.to_string()),
        })
    }
}

enum RenderOutcome {
    Cancelled,
    Error(String),
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
