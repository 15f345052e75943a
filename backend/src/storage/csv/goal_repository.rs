//! # CSV Goal Repository
//!
//! The three savings goals live in `goals.csv`. Unlike the ledgers this table
//! is mutated in place: it always has one row per goal id.
//!
//! ```csv
//! ID,Name,Target,Balance
//! 1,New Phone,300.0,120.0
//! 2,Concert,80.0,80.0
//! 3,Goal 3,100.0,0.0
//! ```

use anyhow::Result;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use crate::domain::models::{SavingsGoal, GOAL_COUNT};
use crate::storage::traits::GoalStorage;
use super::connection::CsvConnection;
use super::table::{read_table, write_table};

const GOALS_HEADER: [&str; 4] = ["ID", "Name", "Target", "Balance"];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GoalRecord {
    #[serde(rename = "ID")]
    id: u32,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Target", default)]
    target: Option<f64>,
    #[serde(rename = "Balance", default)]
    balance: Option<f64>,
}

impl From<&SavingsGoal> for GoalRecord {
    fn from(goal: &SavingsGoal) -> Self {
        GoalRecord {
            id: goal.id,
            name: goal.name.clone(),
            target: Some(goal.target),
            balance: Some(goal.balance),
        }
    }
}

impl From<GoalRecord> for SavingsGoal {
    fn from(record: GoalRecord) -> Self {
        SavingsGoal {
            id: record.id,
            name: record.name,
            target: record.target.unwrap_or(0.0),
            balance: record.balance.unwrap_or(0.0),
        }
    }
}

/// Bring any set of goal rows to exactly ids `1..=GOAL_COUNT`, sorted.
///
/// Missing ids get placeholders; rows with unknown or duplicate ids are dropped.
pub fn normalize_goals(goals: Vec<SavingsGoal>) -> Vec<SavingsGoal> {
    let mut normalized: Vec<SavingsGoal> = Vec::with_capacity(GOAL_COUNT as usize);

    for id in 1..=GOAL_COUNT {
        match goals.iter().find(|goal| goal.id == id) {
            Some(goal) => normalized.push(goal.clone()),
            None => {
                debug!("Goal {} missing from table, using placeholder", id);
                normalized.push(SavingsGoal::placeholder(id));
            }
        }
    }

    let dropped = goals.iter().filter(|goal| goal.id == 0 || goal.id > GOAL_COUNT).count();
    if dropped > 0 {
        warn!("Ignoring {} goal rows with ids outside 1..={}", dropped, GOAL_COUNT);
    }

    normalized
}

#[derive(Clone)]
pub struct GoalRepository {
    connection: CsvConnection,
}

impl GoalRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }
}

impl GoalStorage for GoalRepository {
    fn load_goals(&self) -> Result<Vec<SavingsGoal>> {
        let records: Vec<GoalRecord> = read_table(&self.connection.goals_file_path())?;
        let goals = records.into_iter().map(SavingsGoal::from).collect();
        Ok(normalize_goals(goals))
    }

    fn save_goals(&self, goals: &[SavingsGoal]) -> Result<()> {
        let records: Vec<GoalRecord> = goals.iter().map(GoalRecord::from).collect();
        write_table(&self.connection.goals_file_path(), &GOALS_HEADER, &records)
    }

    fn get_goal(&self, goal_id: u32) -> Result<Option<SavingsGoal>> {
        Ok(self.load_goals()?.into_iter().find(|goal| goal.id == goal_id))
    }

    fn update_goal(&self, goal: &SavingsGoal) -> Result<bool> {
        let mut goals = self.load_goals()?;

        let Some(slot) = goals.iter_mut().find(|existing| existing.id == goal.id) else {
            return Ok(false);
        };
        *slot = goal.clone();

        self.save_goals(&goals)?;
        info!(
            "Updated goal {} '{}': target={:.2} balance={:.2}",
            goal.id, goal.name, goal.target, goal.balance
        );
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::TestEnvironment;

    #[test]
    fn test_missing_file_gives_three_placeholders() {
        let env = TestEnvironment::new().unwrap();
        let repo = GoalRepository::new(env.connection.clone());

        let goals = repo.load_goals().unwrap();

        assert_eq!(goals.len(), 3);
        assert_eq!(goals[0], SavingsGoal::placeholder(1));
        assert_eq!(goals[2].name, "Goal 3");
    }

    #[test]
    fn test_short_table_is_padded_and_sorted() {
        let env = TestEnvironment::new().unwrap();
        env.write_file("goals.csv", "ID,Name,Target,Balance\n3,Concert,80,20\n1,Phone,300,\n").unwrap();
        let repo = GoalRepository::new(env.connection.clone());

        let goals = repo.load_goals().unwrap();

        assert_eq!(goals.iter().map(|g| g.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(goals[0].name, "Phone");
        assert_eq!(goals[0].balance, 0.0);
        assert_eq!(goals[1], SavingsGoal::placeholder(2));
        assert_eq!(goals[2].balance, 20.0);
    }

    #[test]
    fn test_update_goal_in_place() {
        let env = TestEnvironment::new().unwrap();
        let repo = GoalRepository::new(env.connection.clone());

        let mut goal = repo.get_goal(2).unwrap().unwrap();
        goal.name = "Skateboard".to_string();
        goal.balance = 12.0;

        assert!(repo.update_goal(&goal).unwrap());
        assert_eq!(repo.get_goal(2).unwrap().unwrap(), goal);
        assert_eq!(repo.load_goals().unwrap().len(), 3);
    }

    #[test]
    fn test_update_unknown_goal_is_rejected() {
        let env = TestEnvironment::new().unwrap();
        let repo = GoalRepository::new(env.connection.clone());

        let goal = SavingsGoal::placeholder(7);

        assert!(!repo.update_goal(&goal).unwrap());
        assert!(repo.get_goal(7).unwrap().is_none());
    }

    #[test]
    fn test_normalize_drops_out_of_range_and_duplicates() {
        let mut first = SavingsGoal::placeholder(1);
        first.name = "First".to_string();
        let mut duplicate = SavingsGoal::placeholder(1);
        duplicate.name = "Duplicate".to_string();

        let goals = normalize_goals(vec![first, duplicate, SavingsGoal::placeholder(9)]);

        assert_eq!(goals.len(), 3);
        assert_eq!(goals[0].name, "First");
    }

    #[test]
    fn test_malformed_balance_is_an_error() {
        let env = TestEnvironment::new().unwrap();
        env.write_file("goals.csv", "ID,Name,Target,Balance\n1,Phone,300,12 dollars\n").unwrap();
        let repo = GoalRepository::new(env.connection.clone());

        assert!(repo.load_goals().is_err());
    }
}
