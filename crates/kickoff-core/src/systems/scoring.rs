//! Goal system - credits the scoring team and restarts from the centre spot

use hecs::{Entity, World};
use kickoff_logic::constants::Side;
use kickoff_logic::geometry::Vec2;

use super::copied;
use crate::components::{Ball, Goal, Position};
use crate::events::MatchEvent;
use crate::team::Team;

/// Check the ball centre against each goal in order; the first goal that
/// contains it scores. The ball is reset to `centre_spot` as a dead ball,
/// whoever was carrying or charging it.
pub fn goal_system(
    world: &mut World,
    ball_entity: Entity,
    goals: &[Goal],
    teams: &mut [Team; 2],
    centre_spot: Vec2,
) -> Option<MatchEvent> {
    let ball_pos = copied::<Position>(world, ball_entity)?.0;
    let goal = goals.iter().find(|g| g.contains(ball_pos))?;

    let scorer = goal.scorer;
    teams[scorer.index()].award_goal();

    if let Ok((ball, pos)) = world.query_one_mut::<(&mut Ball, &mut Position)>(ball_entity) {
        ball.reset();
        pos.0 = centre_spot;
    }

    let home = teams[Side::Home.index()].score;
    let away = teams[Side::Away.index()].score;
    log::info!("GOAL for {}, {}:{}", scorer.label(), home, away);
    Some(MatchEvent::GoalScored { scorer, home, away })
}
