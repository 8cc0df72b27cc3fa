mod entrance;

pub use entrance::Pose;

use crate::animation::*;
use common::model::{ActiveTab, ShellEvent, ShellState};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;
use yew::Reducible;

type EntranceAnimator = Rc<RefCell<FloatAnimator<Animator<Pose>>>>;

/// Milliseconds since the epoch.
pub type Clock = fn() -> f64;

fn start(animator: Animator<Pose>, now: f64) -> EntranceAnimator {
    Rc::new(RefCell::new(FloatAnimator::started_at(animator, now)))
}

pub enum ShellAction {
    Event(ShellEvent),
    Animate,
}

/// Page state plus the entrance animations currently in flight.
#[derive(Clone)]
pub struct Shell {
    pub state: ShellState,
    clock: Clock,
    header: EntranceAnimator,
    board: EntranceAnimator,
    moves: EntranceAnimator,
}

impl Shell {
    pub fn new() -> Self {
        Self::with_clock(js_sys::Date::now)
    }

    pub fn with_clock(clock: Clock) -> Self {
        let now = clock();
        Shell {
            state: ShellState::new(),
            clock,
            header: start(entrance::header(), now),
            board: start(entrance::board_cells(), now),
            moves: start(entrance::move_entries(), now),
        }
    }

    pub fn header_poses(&self) -> Vec<Pose> {
        self.header.borrow().frame()
    }

    pub fn board_poses(&self) -> Vec<Pose> {
        self.board.borrow().frame()
    }

    pub fn move_poses(&self) -> Vec<Pose> {
        self.moves.borrow().frame()
    }

    pub fn is_settled(&self) -> bool {
        self.header.borrow().is_over()
            && self.board.borrow().is_over()
            && (!self.state.shows_move_list() || self.moves.borrow().is_over())
    }

    fn animate_at(&self, now: f64) {
        self.header.borrow_mut().animate_at(now);
        self.board.borrow_mut().animate_at(now);
        self.moves.borrow_mut().animate_at(now);
    }
}

impl Reducible for Shell {
    type Action = ShellAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ShellAction::Event(event) => {
                if let ShellEvent::Control(button) = event {
                    debug!("{} pressed; playback controls are not implemented", button);
                }

                let mut shell = (*self).clone();
                if !shell.state.apply(event) {
                    return self;
                }
                debug!("theme={} tab={}", shell.state.theme, shell.state.tab);

                if event == ShellEvent::SelectTab(ActiveTab::Board) {
                    shell.moves = start(entrance::move_entries(), (shell.clock)());
                }
                shell.into()
            }
            ShellAction::Animate => {
                self.animate_at((self.clock)());
                Rc::new((*self).clone())
            }
        }
    }
}
