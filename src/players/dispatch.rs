//! Run a player on its own decision thread.
//!
//! Every call is boxed into a task and sent to the player's thread, where
//! tasks run in the order they were sent. Notifications return as soon as
//! they are queued; a failing notification is only logged. Questions block
//! on a single-slot channel until the answer arrives, so at most one
//! question is in flight at a time.

use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use crate::cards::Card;
use crate::core::{Multiset, PlayerId, PlayerMap};
use crate::game::{DrawSlot, Player, PlayerError, PlayerResult, TurnKind};
use crate::map::{Route, Ticket};
use crate::state::{PlayerState, PublicGameState};

type Task<P> = Box<dyn FnOnce(&mut P) + Send>;

/// A `Player` whose decisions are made on a dedicated thread.
pub struct DispatchedPlayer<P> {
    tasks: Option<Sender<Task<P>>>,
    worker: Option<JoinHandle<()>>,
}

impl<P: Player + Send + 'static> DispatchedPlayer<P> {
    /// Move `player` to a new thread.
    #[must_use]
    pub fn spawn(player: P) -> Self {
        let (tasks, inbox) = mpsc::channel::<Task<P>>();
        let worker = thread::spawn(move || {
            let mut player = player;
            for task in inbox {
                task(&mut player);
            }
            log::debug!("player thread exiting");
        });
        Self {
            tasks: Some(tasks),
            worker: Some(worker),
        }
    }

    fn notify(&self, request: impl FnOnce(&mut P) -> PlayerResult<()> + Send + 'static) -> PlayerResult<()> {
        let task: Task<P> = Box::new(move |player| {
            if let Err(error) = request(player) {
                log::warn!("player notification failed: {}", error);
            }
        });
        self.send(task)
    }

    fn send(&self, task: Task<P>) -> PlayerResult<()> {
        self.tasks
            .as_ref()
            .ok_or(PlayerError::Unavailable)?
            .send(task)
            .map_err(|_| PlayerError::Unavailable)
    }

    fn call<T: Send + 'static>(
        &self,
        request: impl FnOnce(&mut P) -> PlayerResult<T> + Send + 'static,
    ) -> PlayerResult<T> {
        let (answer, rendezvous) = mpsc::sync_channel(1);
        let task: Task<P> = Box::new(move |player| {
            // The caller may have given up waiting; nothing to do then.
            let _ = answer.send(request(player));
        });
        self.send(task)?;
        rendezvous.recv().map_err(|_| PlayerError::Unavailable)?
    }
}

impl<P> Drop for DispatchedPlayer<P> {
    fn drop(&mut self) {
        self.tasks.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::warn!("player thread panicked");
            }
        }
    }
}

impl<P: Player + Send + 'static> Player for DispatchedPlayer<P> {
    fn init_players(&mut self, own_id: PlayerId, names: &PlayerMap<String>) -> PlayerResult<()> {
        let names = names.clone();
        self.notify(move |p| p.init_players(own_id, &names))
    }

    fn receive_info(&mut self, info: &str) -> PlayerResult<()> {
        let info = info.to_string();
        self.notify(move |p| p.receive_info(&info))
    }

    fn update_state(&mut self, state: &PublicGameState, own_state: &PlayerState) -> PlayerResult<()> {
        let (state, own_state) = (state.clone(), own_state.clone());
        self.notify(move |p| p.update_state(&state, &own_state))
    }

    fn set_initial_ticket_choice(&mut self, tickets: &Multiset<Ticket>) -> PlayerResult<()> {
        let tickets = tickets.clone();
        self.notify(move |p| p.set_initial_ticket_choice(&tickets))
    }

    fn choose_initial_tickets(&mut self) -> PlayerResult<Multiset<Ticket>> {
        self.call(|p| p.choose_initial_tickets())
    }

    fn next_turn(&mut self) -> PlayerResult<TurnKind> {
        self.call(|p| p.next_turn())
    }

    fn choose_tickets(&mut self, options: &Multiset<Ticket>) -> PlayerResult<Multiset<Ticket>> {
        let options = options.clone();
        self.call(move |p| p.choose_tickets(&options))
    }

    fn draw_slot(&mut self) -> PlayerResult<DrawSlot> {
        self.call(|p| p.draw_slot())
    }

    fn claimed_route(&mut self) -> PlayerResult<Route> {
        self.call(|p| p.claimed_route())
    }

    fn initial_claim_cards(&mut self) -> PlayerResult<Multiset<Card>> {
        self.call(|p| p.initial_claim_cards())
    }

    fn choose_additional_cards(&mut self, options: &[Multiset<Card>]) -> PlayerResult<Multiset<Card>> {
        let options = options.to_vec();
        self.call(move |p| p.choose_additional_cards(&options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::RandomPlayer;
    use std::sync::mpsc::Receiver;
    use std::thread::ThreadId;

    /// Records the thread each call runs on.
    struct ThreadRecorder {
        seen: Sender<ThreadId>,
        gate: Option<Receiver<()>>,
    }

    impl ThreadRecorder {
        fn new(seen: Sender<ThreadId>) -> Self {
            Self { seen, gate: None }
        }
    }

    impl Player for ThreadRecorder {
        fn init_players(&mut self, _: PlayerId, _: &PlayerMap<String>) -> PlayerResult<()> {
            let _ = self.seen.send(thread::current().id());
            Ok(())
        }
        fn receive_info(&mut self, info: &str) -> PlayerResult<()> {
            match info {
                "boom" => panic!("player asked to fail"),
                "wait" => {
                    if let Some(gate) = &self.gate {
                        let _ = gate.recv();
                    }
                }
                _ => {}
            }
            Ok(())
        }
        fn update_state(&mut self, _: &PublicGameState, _: &PlayerState) -> PlayerResult<()> {
            Ok(())
        }
        fn set_initial_ticket_choice(&mut self, _: &Multiset<Ticket>) -> PlayerResult<()> {
            Ok(())
        }
        fn choose_initial_tickets(&mut self) -> PlayerResult<Multiset<Ticket>> {
            Ok(Multiset::new())
        }
        fn next_turn(&mut self) -> PlayerResult<TurnKind> {
            Ok(TurnKind::DrawCards)
        }
        fn choose_tickets(&mut self, options: &Multiset<Ticket>) -> PlayerResult<Multiset<Ticket>> {
            Ok(options.clone())
        }
        fn draw_slot(&mut self) -> PlayerResult<DrawSlot> {
            Ok(DrawSlot::Deck)
        }
        fn claimed_route(&mut self) -> PlayerResult<Route> {
            Err(PlayerError::Unavailable)
        }
        fn initial_claim_cards(&mut self) -> PlayerResult<Multiset<Card>> {
            Ok(Multiset::new())
        }
        fn choose_additional_cards(&mut self, _: &[Multiset<Card>]) -> PlayerResult<Multiset<Card>> {
            Ok(Multiset::new())
        }
    }

    #[test]
    fn test_calls_run_on_worker_thread() {
        let (seen, observed) = mpsc::channel();
        let mut player = DispatchedPlayer::spawn(ThreadRecorder::new(seen));
        player.init_players(PlayerId::PLAYER_1, &PlayerMap::new(|_| String::new())).unwrap();

        let worker = observed.recv().unwrap();
        assert_ne!(worker, thread::current().id());
        assert_eq!(player.next_turn().unwrap(), TurnKind::DrawCards);
    }

    #[test]
    fn test_errors_pass_through() {
        let (seen, _observed) = mpsc::channel();
        let mut player = DispatchedPlayer::spawn(ThreadRecorder::new(seen));
        assert!(matches!(player.claimed_route(), Err(PlayerError::Unavailable)));
    }

    #[test]
    fn test_panicked_player_is_unavailable() {
        let (seen, _observed) = mpsc::channel();
        let mut player = DispatchedPlayer::spawn(ThreadRecorder::new(seen));
        // The notification is queued before the worker panics on it.
        let _ = player.receive_info("boom");
        assert!(matches!(player.next_turn(), Err(PlayerError::Unavailable)));
    }

    #[test]
    fn test_notifications_do_not_wait_for_the_player() {
        let (seen, _observed) = mpsc::channel();
        let (open, gate) = mpsc::channel();
        let mut player = DispatchedPlayer::spawn(ThreadRecorder {
            seen,
            gate: Some(gate),
        });

        // The worker stays blocked in the first notification until the gate opens.
        player.receive_info("wait").unwrap();
        player.receive_info("queued").unwrap();
        player.set_initial_ticket_choice(&Multiset::new()).unwrap();
        open.send(()).unwrap();

        assert_eq!(player.next_turn().unwrap(), TurnKind::DrawCards);
    }

    #[test]
    fn test_same_answers_as_direct_player() {
        let mut direct = RandomPlayer::new(5);
        let mut dispatched = DispatchedPlayer::spawn(RandomPlayer::new(5));
        for _ in 0..5 {
            assert_eq!(direct.draw_slot().unwrap(), dispatched.draw_slot().unwrap());
        }
    }
}
