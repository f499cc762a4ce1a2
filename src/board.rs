//! Board State
//!
//! Single source of truth for the three ordered task lists. Every mutation
//! goes through here; the rendered DOM and the persisted snapshot are both
//! derived from this state, never the other way around.

use crate::models::{Column, StoredTask, Task, COLUMNS};

/// The three ordered task sequences, one per column. Insertion order is
/// display order and persisted order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    columns: [Vec<Task>; 3],
    next_id: u32,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a board from a persisted snapshot. Absent or malformed data
    /// yields an empty board; this never fails to the caller. Ids are
    /// assigned fresh, the wire format is positional.
    pub fn decode(snapshot: Option<&str>) -> Board {
        let mut board = Board::new();
        let Some(raw) = snapshot else {
            return board;
        };
        let Ok(records) = serde_json::from_str::<Vec<StoredTask>>(raw) else {
            return board;
        };
        for record in records {
            let id = board.fresh_id();
            board.columns[record.status.index()].push(Task {
                id,
                title: record.task_title,
                column: record.status,
            });
        }
        board
    }

    /// Flatten all three columns into the snapshot blob, in the fixed order
    /// Not started, In progress, Completed.
    pub fn encode(&self) -> String {
        let records: Vec<StoredTask> = COLUMNS
            .iter()
            .flat_map(|column| self.columns[column.index()].iter())
            .map(|task| StoredTask {
                task_title: task.title.clone(),
                status: task.column,
            })
            .collect();
        serde_json::to_string(&records).unwrap_or_else(|_| "[]".to_string())
    }

    /// Append a new task to the column's tail. A whitespace-only title is
    /// rejected; the stored title keeps the raw input. Returns whether a
    /// task was added.
    pub fn add(&mut self, column: Column, title: &str) -> bool {
        if title.trim().is_empty() {
            return false;
        }
        let id = self.fresh_id();
        self.columns[column.index()].push(Task {
            id,
            title: title.to_string(),
            column,
        });
        true
    }

    /// Remove the task at `index`; out-of-bounds indexes are ignored
    pub fn remove(&mut self, column: Column, index: usize) {
        let tasks = &mut self.columns[column.index()];
        if index < tasks.len() {
            tasks.remove(index);
        }
    }

    /// Reposition within a column. `to` is the insertion index with the
    /// moved task removed: the task lands immediately before the record
    /// occupying that slot, or at the tail when past the end.
    pub fn move_within(&mut self, column: Column, from: usize, to: usize) {
        let tasks = &mut self.columns[column.index()];
        if from >= tasks.len() {
            return;
        }
        let task = tasks.remove(from);
        let slot = to.min(tasks.len());
        tasks.insert(slot, task);
    }

    /// Remove from the source column, append to the destination's tail.
    /// Cross-column drops never preserve a mid-list position.
    pub fn transfer(&mut self, from: Column, index: usize, to: Column) {
        if from == to || index >= self.columns[from.index()].len() {
            return;
        }
        let mut task = self.columns[from.index()].remove(index);
        task.column = to;
        self.columns[to.index()].push(task);
    }

    /// Replace a title in place. Any string is accepted, including empty;
    /// only the add path validates.
    pub fn edit_title(&mut self, column: Column, index: usize, new_title: &str) {
        if let Some(task) = self.columns[column.index()].get_mut(index) {
            task.title = new_title.to_string();
        }
    }

    pub fn tasks(&self, column: Column) -> &[Task] {
        &self.columns[column.index()]
    }

    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Vec::is_empty)
    }

    /// Column and index of a task by its session id
    pub fn position_of(&self, id: u32) -> Option<(Column, usize)> {
        for column in COLUMNS {
            if let Some(index) = self.columns[column.index()]
                .iter()
                .position(|task| task.id == id)
            {
                return Some((column, index));
            }
        }
        None
    }

    /// Slot of `sibling` in its column with `dragged` removed, used by the
    /// midpoint rule during a drag
    pub fn sibling_slot(&self, dragged: u32, sibling: u32) -> Option<usize> {
        let (column, _) = self.position_of(sibling)?;
        self.columns[column.index()]
            .iter()
            .filter(|task| task.id != dragged)
            .position(|task| task.id == sibling)
    }

    /// Tail slot of a column with `dragged` removed
    pub fn tail_slot(&self, column: Column, dragged: u32) -> usize {
        self.columns[column.index()]
            .iter()
            .filter(|task| task.id != dragged)
            .count()
    }

    fn fresh_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }
}

/// Display order of a column under an active drag preview: the dragged card
/// is pulled out and re-inserted at the candidate slot. The board itself is
/// only mutated on release.
pub fn preview_order(tasks: &[Task], preview: Option<(u32, usize)>) -> Vec<Task> {
    let Some((dragged, candidate)) = preview else {
        return tasks.to_vec();
    };
    let Some(pos) = tasks.iter().position(|task| task.id == dragged) else {
        return tasks.to_vec();
    };
    let mut ordered = tasks.to_vec();
    let card = ordered.remove(pos);
    let slot = candidate.min(ordered.len());
    ordered.insert(slot, card);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(board: &Board, column: Column) -> Vec<&str> {
        board.tasks(column).iter().map(|t| t.title.as_str()).collect()
    }

    fn board_with(not_started: &[&str]) -> Board {
        let mut board = Board::new();
        for title in not_started {
            assert!(board.add(Column::NotStarted, title));
        }
        board
    }

    #[test]
    fn test_decode_absent_or_malformed_is_empty() {
        assert!(Board::decode(None).is_empty());
        assert!(Board::decode(Some("not json")).is_empty());
        assert!(Board::decode(Some(r#"{"taskTitle":"x"}"#)).is_empty());
        // One bad status rejects the whole snapshot
        assert!(Board::decode(Some(
            r#"[{"taskTitle":"a","status":"Completed"},{"taskTitle":"b","status":"Done"}]"#
        ))
        .is_empty());
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let mut board = board_with(&["A", "B"]);
        board.add(Column::InProgress, "C");
        board.add(Column::Completed, "D");
        board.move_within(Column::NotStarted, 0, 1);

        let snapshot = board.encode();
        let back = Board::decode(Some(&snapshot));

        for column in COLUMNS {
            assert_eq!(titles(&back, column), titles(&board, column));
        }
    }

    #[test]
    fn test_add_rejects_whitespace_only_titles() {
        let mut board = board_with(&["A"]);
        assert!(!board.add(Column::NotStarted, "   "));
        assert!(!board.add(Column::InProgress, "\t\n"));
        assert!(!board.add(Column::Completed, ""));
        assert_eq!(board.len(), 1);
        // The raw input is kept, not the trimmed form
        assert!(board.add(Column::NotStarted, " padded "));
        assert_eq!(titles(&board, Column::NotStarted), vec!["A", " padded "]);
    }

    #[test]
    fn test_remove_ignores_out_of_bounds() {
        let mut board = board_with(&["A", "B"]);
        board.remove(Column::NotStarted, 5);
        board.remove(Column::InProgress, 0);
        assert_eq!(board.len(), 2);
        board.remove(Column::NotStarted, 0);
        assert_eq!(titles(&board, Column::NotStarted), vec!["B"]);
    }

    #[test]
    fn test_move_within_inserts_before_target_slot() {
        let mut board = board_with(&["A", "B", "C"]);
        board.move_within(Column::NotStarted, 0, 1);
        assert_eq!(titles(&board, Column::NotStarted), vec!["B", "A", "C"]);
        // Past the end lands at the tail
        board.move_within(Column::NotStarted, 0, 9);
        assert_eq!(titles(&board, Column::NotStarted), vec!["A", "C", "B"]);
        // Out-of-bounds source is a no-op
        board.move_within(Column::NotStarted, 9, 0);
        assert_eq!(titles(&board, Column::NotStarted), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_transfer_appends_to_destination_tail() {
        let mut board = board_with(&["A", "B"]);
        board.add(Column::Completed, "Z");
        board.transfer(Column::NotStarted, 0, Column::Completed);
        assert_eq!(titles(&board, Column::NotStarted), vec!["B"]);
        assert_eq!(titles(&board, Column::Completed), vec!["Z", "A"]);
        // Same column or bad index is a no-op
        board.transfer(Column::Completed, 0, Column::Completed);
        board.transfer(Column::InProgress, 0, Column::NotStarted);
        assert_eq!(titles(&board, Column::Completed), vec!["Z", "A"]);

        let (column, _) = board.position_of(board.tasks(Column::Completed)[1].id).unwrap();
        assert_eq!(column, Column::Completed);
    }

    #[test]
    fn test_edit_accepts_empty_title() {
        let mut board = board_with(&["A"]);
        board.edit_title(Column::NotStarted, 0, "");
        assert_eq!(titles(&board, Column::NotStarted), vec![""]);
        let snapshot = board.encode();
        let back = Board::decode(Some(&snapshot));
        assert_eq!(titles(&back, Column::NotStarted), vec![""]);
        // Out-of-bounds edit is ignored
        board.edit_title(Column::NotStarted, 3, "x");
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_snapshot_flattened_column_order() {
        // {NS: [A, B]} -> add C to InProgress -> transfer A to Completed
        // -> snapshot order [B(NS), C(IP), A(C)]
        let mut board = board_with(&["A", "B"]);
        board.add(Column::InProgress, "C");
        board.transfer(Column::NotStarted, 0, Column::Completed);

        assert_eq!(titles(&board, Column::NotStarted), vec!["B"]);
        assert_eq!(titles(&board, Column::InProgress), vec!["C"]);
        assert_eq!(titles(&board, Column::Completed), vec!["A"]);

        let records: Vec<StoredTask> = serde_json::from_str(&board.encode()).unwrap();
        let flat: Vec<(&str, Column)> = records
            .iter()
            .map(|r| (r.task_title.as_str(), r.status))
            .collect();
        assert_eq!(
            flat,
            vec![
                ("B", Column::NotStarted),
                ("C", Column::InProgress),
                ("A", Column::Completed),
            ]
        );
    }

    #[test]
    fn test_sibling_and_tail_slots_exclude_dragged() {
        let board = board_with(&["A", "B", "C"]);
        let ids: Vec<u32> = board.tasks(Column::NotStarted).iter().map(|t| t.id).collect();
        // Dragging A: B sits at slot 0, C at slot 1 of the remaining list
        assert_eq!(board.sibling_slot(ids[0], ids[1]), Some(0));
        assert_eq!(board.sibling_slot(ids[0], ids[2]), Some(1));
        assert_eq!(board.tail_slot(Column::NotStarted, ids[0]), 2);
        assert_eq!(board.tail_slot(Column::InProgress, ids[0]), 0);
        assert_eq!(board.sibling_slot(ids[0], 999), None);
    }

    #[test]
    fn test_preview_order_overlays_candidate_slot() {
        let board = board_with(&["A", "B", "C"]);
        let tasks = board.tasks(Column::NotStarted);
        let dragged = tasks[2].id; // C

        let unchanged = preview_order(tasks, None);
        let order: Vec<&str> = unchanged.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);

        let previewed = preview_order(tasks, Some((dragged, 0)));
        let order: Vec<&str> = previewed.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(order, vec!["C", "A", "B"]);

        // Candidate past the end clamps to the tail
        let previewed = preview_order(tasks, Some((dragged, 9)));
        let order: Vec<&str> = previewed.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_round_trip_after_operation_sequences() {
        let mut board = Board::new();
        board.add(Column::NotStarted, "one");
        board.add(Column::NotStarted, "two");
        board.add(Column::InProgress, "three");
        board.move_within(Column::NotStarted, 1, 0);
        board.transfer(Column::InProgress, 0, Column::NotStarted);
        board.remove(Column::NotStarted, 1);
        board.edit_title(Column::NotStarted, 0, "TWO");

        let back = Board::decode(Some(&board.encode()));
        for column in COLUMNS {
            assert_eq!(titles(&back, column), titles(&board, column));
        }
        assert_eq!(titles(&board, Column::NotStarted), vec!["TWO", "three"]);
    }
}
