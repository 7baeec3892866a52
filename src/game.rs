//! Frame loop driver
//!
//! One thread, one loop: poll input, advance the session, scroll the
//! backdrop, emit audio cues and a render frame, then sleep off the rest of
//! the frame.

use serde::Serialize;

use crate::audio::{AudioCue, AudioManager, AudioSink};
use crate::highscores::HighScores;
use crate::platform::{FrameInput, FrameLimiter, InputSource};
use crate::renderer::{FractalAnimator, RenderFrame, RenderSink};
use crate::settings::Settings;
use crate::sim::{
    Clock, Entity, ScrollLayer, Session, SessionEvent, SessionState, TickInput, TimeSource, tick,
};

/// What a finished `run` call reports
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub frames: u64,
    /// Seconds simulated by this `run` call
    pub elapsed: f64,
    pub runs: u32,
    pub best: Option<u32>,
    pub leaderboard: HighScores,
}

/// Game instance holding all state
pub struct Game<T: TimeSource, A: AudioSink, V: RenderSink> {
    settings: Settings,
    clock: Clock<T>,
    session: Session,
    background: ScrollLayer,
    ground: ScrollLayer,
    fractal: FractalAnimator,
    audio: AudioManager<A>,
    renderer: V,
    highscores: HighScores,
    limiter: Option<FrameLimiter>,
    frames: u64,
}

impl<T: TimeSource, A: AudioSink, V: RenderSink> Game<T, A, V> {
    /// Set up a session and start the soundtrack
    pub fn new(settings: Settings, time: T, audio_sink: A, renderer: V) -> Self {
        let field = settings.field.size();
        let mut audio = AudioManager::new(audio_sink, &settings.audio);
        audio.play(AudioCue::BackgroundMusicLoop);
        log::info!(
            "Game initialized: field {}x{}, seed {}",
            settings.field.width,
            settings.field.height,
            settings.seed
        );

        Self {
            clock: Clock::new(time, settings.max_frame_dt),
            session: Session::new(&settings),
            background: ScrollLayer::background(field, settings.spawn.background_speed),
            ground: ScrollLayer::ground(
                field,
                settings.field.ground_height,
                settings.spawn.ground_speed,
            ),
            fractal: FractalAnimator::new(),
            audio,
            renderer,
            highscores: HighScores::new(),
            limiter: Some(FrameLimiter::new(settings.frame_rate)),
            frames: 0,
            settings,
        }
    }

    /// Run frames back to back without sleeping
    pub fn uncapped(mut self) -> Self {
        self.limiter = None;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn highscores(&self) -> &HighScores {
        &self.highscores
    }

    pub fn audio(&self) -> &AudioManager<A> {
        &self.audio
    }

    pub fn renderer(&self) -> &V {
        &self.renderer
    }

    pub fn clock_mut(&mut self) -> &mut Clock<T> {
        &mut self.clock
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Process one frame; returns false once the player quits
    pub fn frame(&mut self, input: &FrameInput) -> bool {
        if input.quit {
            log::info!("Quit requested after {} frames", self.frames);
            return false;
        }

        let dt = self.clock.tick();
        let events = tick(
            &mut self.session,
            &TickInput {
                activate: input.activate,
            },
            dt,
        );
        self.background.update(dt);
        self.ground.update(dt);

        for event in &events {
            self.handle_event(event);
        }

        let show_fractal = input.fractal_held && self.session.state == SessionState::Inactive;
        if show_fractal {
            self.fractal.advance();
        }

        let frame = self.render_frame(show_fractal);
        self.renderer.present(&frame);
        self.frames += 1;
        true
    }

    fn handle_event(&mut self, event: &SessionEvent) {
        match *event {
            SessionEvent::Jumped => self.audio.play(AudioCue::Jump),
            SessionEvent::Crashed { score, .. } => {
                if let Some(rank) = self.highscores.add_score(score, self.session.run) {
                    log::info!("Run {} placed #{} with {}s", self.session.run, rank, score);
                }
            }
            SessionEvent::Restarted { .. }
            | SessionEvent::Spawned { .. }
            | SessionEvent::Removed { .. } => {}
        }
    }

    /// Snapshot of everything on screen, back to front
    pub fn render_frame(&self, with_fractal: bool) -> RenderFrame {
        let mut draws = Vec::with_capacity(self.session.obstacles.len() + 3);
        draws.push(self.background.draw_request());
        draws.extend(self.session.obstacles.iter().map(Entity::draw_request));
        draws.push(self.ground.draw_request());
        if let Some(vehicle) = &self.session.vehicle {
            draws.push(vehicle.draw_request());
        }

        RenderFrame {
            draws,
            score: self.session.score,
            state: self.session.state,
            best: self.highscores.top_score(),
            fractal: if with_fractal {
                self.fractal.segments(self.settings.field.width)
            } else {
                Vec::new()
            },
        }
    }

    /// Drive the loop until the input source quits or `max_frames` elapse
    ///
    /// Host time that passed before the call (loading, a previous `run`) is
    /// discarded, so the first frame starts from a zero delta.
    pub fn run<I: InputSource>(&mut self, input: &mut I, max_frames: Option<u64>) -> RunSummary {
        self.clock.reset();
        loop {
            if max_frames.is_some_and(|max| self.frames >= max) {
                break;
            }
            let frame_input = input.poll(&self.session.view());
            if !self.frame(&frame_input) {
                break;
            }
            if let Some(limiter) = self.limiter.as_mut() {
                limiter.wait();
            }
        }

        log::info!(
            "Loop finished after {} frames ({:.1}s simulated)",
            self.frames,
            self.clock.elapsed()
        );
        RunSummary {
            frames: self.frames,
            elapsed: self.clock.elapsed(),
            runs: self.session.run,
            best: self.highscores.top_score(),
            leaderboard: self.highscores.clone(),
        }
    }
}
