//! Fetch/filter/display state machine for the aspirant roster.
//!
//! The board owns the held list, the presentation status, and the active
//! filters as a single state bundle. All transitions run on discrete events;
//! the only asynchronous step is the roster fetch, which is guarded by a
//! request generation so a stale response can never overwrite state produced
//! by a newer request.

pub mod domain;
pub mod remote;
pub mod render;

use tracing::{error, info, warn};

pub use domain::{Aspirant, RosterFilters, ViewStatus};
pub use remote::{AspirantSource, FetchError, HttpAspirantSource};
pub use render::{render_table, RenderOptions};

/// Token identifying one fetch attempt. Only the most recently issued token
/// may apply its result to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchGeneration(u64);

/// The roster view component: held list, view status, and local filters.
#[derive(Debug, Default)]
pub struct AspirantBoard {
    aspirants: Vec<Aspirant>,
    status: ViewStatus,
    filters: RosterFilters,
    generation: u64,
}

impl AspirantBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    /// The full held list, including entries the active filters exclude.
    pub fn aspirants(&self) -> &[Aspirant] {
        &self.aspirants
    }

    pub fn filters(&self) -> &RosterFilters {
        &self.filters
    }

    /// Marks a fetch as in flight and returns the token its result must
    /// present to `finish_fetch`.
    pub fn begin_fetch(&mut self) -> FetchGeneration {
        self.generation += 1;
        self.status = ViewStatus::Charging;
        FetchGeneration(self.generation)
    }

    /// Applies a fetch outcome if `generation` is still current.
    ///
    /// A success replaces the held list wholesale and moves the status to
    /// `Done`; a failure is logged and drops the status back to `Empty`,
    /// leaving the list as it was. Outcomes from superseded generations are
    /// discarded without touching any state.
    pub fn finish_fetch(
        &mut self,
        generation: FetchGeneration,
        outcome: Result<Vec<Aspirant>, FetchError>,
    ) -> bool {
        if generation.0 != self.generation {
            warn!(
                stale = generation.0,
                current = self.generation,
                "discarding fetch result from superseded request"
            );
            return false;
        }

        match outcome {
            Ok(aspirants) => {
                info!(count = aspirants.len(), "roster replaced from fetch");
                self.aspirants = aspirants;
                self.status = ViewStatus::Done;
            }
            Err(err) => {
                error!(error = %err, "roster fetch failed");
                self.status = ViewStatus::Empty;
            }
        }
        true
    }

    /// Fetches the roster from `source` and applies the result. Failures are
    /// logged and folded into the empty presentation; they never escape.
    pub async fn fetch_all(&mut self, source: &impl AspirantSource) {
        let generation = self.begin_fetch();
        let outcome = source.fetch_all().await;
        self.finish_fetch(generation, outcome);
    }

    /// Empties the held list locally. Also invalidates any in-flight fetch so
    /// a response started before the clear cannot resurrect the list.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.aspirants.clear();
        self.status = ViewStatus::Empty;
    }

    pub fn set_name_filter(&mut self, raw: &str) {
        self.filters.set_name(raw);
    }

    pub fn set_house_filter(&mut self, raw: &str) {
        self.filters.set_house(raw);
    }

    /// Removes the aspirant with `id` from the held list. No-op when absent;
    /// the remaining entries keep their order. Hidden entries return only via
    /// a later successful fetch.
    pub fn hide(&mut self, id: &str) {
        if let Some(position) = self.aspirants.iter().position(|a| a.id == id) {
            self.aspirants.remove(position);
        }
    }

    /// The held list filtered by the active name and house filters.
    /// Recomputed on every call; the expected data sizes do not warrant a
    /// cache.
    pub fn visible_aspirants(&self) -> Vec<&Aspirant> {
        self.aspirants
            .iter()
            .filter(|aspirant| self.filters.matches(aspirant))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> Vec<Aspirant> {
        vec![
            Aspirant {
                id: "1".to_string(),
                name: "Harry Potter".to_string(),
                species: "human".to_string(),
                house: "Gryffindor".to_string(),
                patronus: "stag".to_string(),
                image: String::new(),
            },
            Aspirant {
                id: "2".to_string(),
                name: "Draco Malfoy".to_string(),
                species: "human".to_string(),
                house: "Slytherin".to_string(),
                patronus: String::new(),
                image: "https://example.org/draco.jpg".to_string(),
            },
        ]
    }

    fn loaded_board() -> AspirantBoard {
        let mut board = AspirantBoard::new();
        let generation = board.begin_fetch();
        board.finish_fetch(generation, Ok(sample_roster()));
        board
    }

    #[test]
    fn begin_fetch_marks_board_charging() {
        let mut board = AspirantBoard::new();
        board.begin_fetch();
        assert_eq!(board.status(), ViewStatus::Charging);
    }

    #[test]
    fn successful_fetch_replaces_list_wholesale() {
        let board = loaded_board();
        assert_eq!(board.status(), ViewStatus::Done);
        assert_eq!(board.aspirants(), sample_roster().as_slice());
    }

    #[test]
    fn failed_fetch_leaves_list_and_resets_status() {
        let mut board = AspirantBoard::new();
        let generation = board.begin_fetch();
        let applied = board.finish_fetch(
            generation,
            Err(FetchError::Status(reqwest::StatusCode::NOT_FOUND)),
        );
        assert!(applied);
        assert_eq!(board.status(), ViewStatus::Empty);
        assert!(board.aspirants().is_empty());
    }

    #[test]
    fn stale_generation_cannot_overwrite_newer_fetch() {
        let mut board = AspirantBoard::new();
        let stale = board.begin_fetch();
        let current = board.begin_fetch();

        let applied = board.finish_fetch(current, Ok(sample_roster()));
        assert!(applied);

        let applied = board.finish_fetch(stale, Ok(Vec::new()));
        assert!(!applied, "superseded result must be discarded");
        assert_eq!(board.aspirants().len(), 2);
        assert_eq!(board.status(), ViewStatus::Done);
    }

    #[test]
    fn clear_invalidates_in_flight_fetch() {
        let mut board = loaded_board();
        let in_flight = board.begin_fetch();
        board.clear();

        let applied = board.finish_fetch(in_flight, Ok(sample_roster()));
        assert!(!applied);
        assert!(board.aspirants().is_empty());
        assert_eq!(board.status(), ViewStatus::Empty);
    }

    #[test]
    fn clear_empties_list_regardless_of_prior_state() {
        let mut board = loaded_board();
        board.set_name_filter("harry");
        board.clear();
        assert!(board.aspirants().is_empty());
        assert_eq!(board.status(), ViewStatus::Empty);
    }

    #[test]
    fn name_filter_narrows_visible_list() {
        let mut board = loaded_board();
        board.set_name_filter("harry");
        let visible = board.visible_aspirants();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
    }

    #[test]
    fn house_filter_matches_substring() {
        let mut board = loaded_board();
        board.set_house_filter("sly");
        let visible = board.visible_aspirants();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");
    }

    #[test]
    fn visible_list_is_subset_of_held_list() {
        let mut board = loaded_board();
        board.set_name_filter("draco");
        board.set_house_filter("gryff");
        assert!(board.visible_aspirants().is_empty());
        assert_eq!(board.aspirants().len(), 2);
    }

    #[test]
    fn hide_removes_exactly_one_matching_entry() {
        let mut board = loaded_board();
        board.hide("2");
        assert_eq!(board.aspirants().len(), 1);
        assert_eq!(board.aspirants()[0].id, "1");
    }

    #[test]
    fn hide_of_absent_id_is_a_noop() {
        let mut board = loaded_board();
        board.hide("404");
        board.hide("404");
        assert_eq!(board.aspirants(), sample_roster().as_slice());
    }

    #[test]
    fn hidden_entry_survives_filter_changes() {
        let mut board = loaded_board();
        board.hide("2");
        board.set_house_filter("sly");
        assert!(board.visible_aspirants().is_empty());
        board.set_house_filter("");
        assert_eq!(board.visible_aspirants().len(), 1);
    }

    #[test]
    fn refetch_restores_previously_hidden_entries() {
        let mut board = loaded_board();
        board.hide("2");
        assert_eq!(board.aspirants().len(), 1);

        let generation = board.begin_fetch();
        board.finish_fetch(generation, Ok(sample_roster()));
        assert_eq!(board.aspirants().len(), 2);
    }
}
