use crate::animation::*;
use common::board::CELLS;
use common::model::MOVE_LIST_LENGTH;

/// Visual offset of an element relative to its resting layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub scale: f64,
    pub x: f64,
    pub y: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.,
        scale: 1.,
        x: 0.,
        y: 0.,
    };

    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translate({:.2}px, {:.2}px) scale({:.3});",
            self.opacity, self.x, self.y, self.scale
        )
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::REST
    }
}

fn interpolation((from, to): (f64, f64), position: f64) -> f64 {
    (from * (1. - position)) + (to * position)
}

fn ease_out(t: f64) -> f64 {
    1. - (1. - t).powi(3)
}

/// Moves an element from `from` to its resting pose after `delay` frames.
pub struct Entrance {
    from: Pose,
    delay: f64,
    duration: f64,
    elapsed: usize,
}

impl Entrance {
    pub fn new(from: Pose, duration_secs: f64, delay_secs: f64) -> Self {
        Entrance {
            from,
            delay: seconds_to_frames(delay_secs),
            duration: seconds_to_frames(duration_secs),
            elapsed: 0,
        }
    }
}

impl Animation for Entrance {
    type Frame = Pose;

    fn advance_frames(&mut self, frames: usize) {
        self.elapsed += frames;
    }

    fn current_frame(&self) -> Pose {
        let relative_time =
            ((self.elapsed as f64 - self.delay) / self.duration).clamp(0., 1.);
        let position = ease_out(relative_time);
        let to = Pose::REST;
        Pose {
            opacity: interpolation((self.from.opacity, to.opacity), position),
            scale: interpolation((self.from.scale, to.scale), position),
            x: interpolation((self.from.x, to.x), position),
            y: interpolation((self.from.y, to.y), position),
        }
    }

    fn is_over(&self) -> bool {
        self.delay + self.duration <= self.elapsed as f64
    }
}

fn hidden(scale: f64, x: f64, y: f64) -> Pose {
    Pose {
        opacity: 0.,
        scale,
        x,
        y,
    }
}

/// Title, then subtitle.
pub fn header() -> Animator<Pose> {
    Animator::new(vec![
        Box::new(Entrance::new(hidden(1., 0., -20.), 0.5, 0.)),
        Box::new(Entrance::new(hidden(1., 0., 20.), 0.5, 0.2)),
    ])
}

pub fn board_cells() -> Animator<Pose> {
    Animator::new(
        (0..CELLS)
            .map(|i| {
                Box::new(Entrance::new(hidden(0.8, 0., 0.), 0.3, i as f64 * 0.01))
                    as Box<dyn Animation<Frame = Pose>>
            })
            .collect(),
    )
}

pub fn move_entries() -> Animator<Pose> {
    Animator::new(
        (0..MOVE_LIST_LENGTH)
            .map(|i| {
                Box::new(Entrance::new(hidden(1., -20., 0.), 0.3, i as f64 * 0.05))
                    as Box<dyn Animation<Frame = Pose>>
            })
            .collect(),
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_entrance_waits_for_delay() {
        // 0.1s delay, 0.5s duration: 6 + 30 frames
        let mut entrance = Entrance::new(hidden(0.8, -20., 0.), 0.5, 0.1);
        entrance.advance_frames(6);
        assert_eq!(entrance.current_frame(), hidden(0.8, -20., 0.));

        entrance.advance_frames(15);
        let halfway = entrance.current_frame();
        assert!(halfway.opacity > 0.5 && halfway.opacity < 1.);
        assert!(halfway.x > -20. && halfway.x < 0.);
        assert!(!entrance.is_over());

        entrance.advance_frames(15);
        assert_eq!(entrance.current_frame(), Pose::REST);
        assert!(entrance.is_over());

        entrance.advance_frames(100);
        assert_eq!(entrance.current_frame(), Pose::REST);
    }

    #[test]
    fn test_board_cells_are_staggered() {
        let mut cells = board_cells();
        assert_eq!(cells.current_frame().len(), 64);

        // 0.3s = 18 frames; the last cell starts 0.63s = 37.8 frames later
        cells.advance_frames(18);
        let frame = cells.current_frame();
        assert_eq!(frame[0], Pose::REST);
        assert_eq!(frame[63].opacity, 0.);
        assert!(!cells.is_over());

        cells.advance_frames(38);
        assert!(cells.is_over());
        assert!(cells.current_frame().iter().all(|pose| *pose == Pose::REST));
    }

    #[test]
    fn test_move_entries() {
        let mut entries = move_entries();
        let frame = entries.current_frame();
        assert_eq!(frame.len(), 10);
        assert!(frame.iter().all(|pose| pose.x == -20. && pose.opacity == 0.));

        // last entry: 0.45s delay + 0.3s = 45 frames
        entries.advance_frames(44);
        assert!(!entries.is_over());
        entries.advance_frames(1);
        assert!(entries.is_over());
    }

    #[test]
    fn test_header() {
        let mut header = header();
        header.advance_frames(30);
        let [title, subtitle]: [Pose; 2] = header.current_frame().try_into().unwrap();
        assert_eq!(title, Pose::REST);
        assert!(subtitle.y > 0.);
        header.advance_frames(12);
        assert!(header.is_over());
    }

    #[test]
    fn test_style() {
        assert_eq!(
            Pose::REST.style(),
            "opacity: 1.000; transform: translate(0.00px, 0.00px) scale(1.000);"
        );
    }
}
