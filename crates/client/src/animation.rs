pub const FRAMES_PER_SECOND: f64 = 60.0;

pub fn seconds_to_frames(seconds: f64) -> f64 {
    seconds * FRAMES_PER_SECOND
}

pub trait Animation {
    type Frame;

    fn advance_frames(&mut self, frames: usize);
    fn current_frame(&self) -> Self::Frame;
    fn is_over(&self) -> bool;
}

pub struct Animator<T> {
    animations: Vec<Box<dyn Animation<Frame = T>>>,
}

impl<T> Animator<T> {
    pub fn new(animations: Vec<Box<dyn Animation<Frame = T>>>) -> Self {
        Animator { animations }
    }
}

impl<T> Animation for Animator<T> {
    type Frame = Vec<T>;

    fn advance_frames(&mut self, frames: usize) {
        for anim in self.animations.iter_mut() {
            anim.advance_frames(frames);
        }
    }

    fn current_frame(&self) -> Vec<T> {
        self.animations
            .iter()
            .map(|anim| anim.current_frame())
            .collect()
    }

    fn is_over(&self) -> bool {
        self.animations.iter().all(|anim| anim.is_over())
    }
}

/// Drives an animation from wall-clock milliseconds.
pub struct FloatAnimator<A: Animation> {
    begin_at: f64,
    elapsed_frames: usize,
    pub animation: A,
}

impl<A: Animation> FloatAnimator<A> {
    pub fn new(animation: A) -> Self {
        Self::started_at(animation, js_sys::Date::now())
    }

    pub fn started_at(animation: A, now: f64) -> Self {
        FloatAnimator {
            begin_at: now,
            elapsed_frames: 0,
            animation,
        }
    }

    pub fn animate(&mut self) {
        self.animate_at(js_sys::Date::now());
    }

    pub fn animate_at(&mut self, now: f64) {
        let elapsed = (now - self.begin_at).max(0.);
        let frames = (elapsed / 1000.0 * FRAMES_PER_SECOND).floor() as usize;
        let frame_delta = frames.saturating_sub(self.elapsed_frames);
        self.elapsed_frames = self.elapsed_frames.max(frames);

        if frame_delta > 0 {
            self.animation.advance_frames(frame_delta);
        }
    }

    pub fn frame(&self) -> A::Frame {
        self.animation.current_frame()
    }

    pub fn is_over(&self) -> bool {
        self.animation.is_over()
    }
}

/// Keeps at most one animation frame request outstanding.
#[derive(Default)]
pub struct FrameRequest {
    pending: bool,
}

impl FrameRequest {
    /// Returns whether a new frame should be requested.
    pub fn begin(&mut self, settled: bool) -> bool {
        if settled || self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn finish(&mut self) {
        self.pending = false;
    }
}
