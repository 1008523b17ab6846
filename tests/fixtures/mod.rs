//! Test fixtures shared by the integration and property tests

#![allow(dead_code)]

use rivalry_ledger::league::{League, Player};
use rivalry_ledger::season::Game;

pub const TEAMS: [&str; 4] = ["Alpha", "Beta", "Gamma", "Delta"];

/// League with every fixture team registered and one coach per team
pub fn create_test_league() -> League {
    let mut league = League::new();
    for team in TEAMS {
        league.add_team(team).unwrap();
        let coach = format!("Coach {}", team);
        league.add_coach(coach.clone()).unwrap();
        league.assign_coach(team, &coach).unwrap();
    }
    league
}

/// League with players signed to each team
pub fn create_league_with_rosters(players_per_team: usize) -> League {
    let mut league = create_test_league();
    for team in TEAMS {
        for i in 0..players_per_team {
            let name = format!("{} Player {}", team, i + 1);
            let rating = 60 + (i as i32 * 7) % 40;
            league.add_player(Player::new(name.clone(), rating).unwrap()).unwrap();
            league.sign_player(team, &name).unwrap();
        }
    }
    league
}

pub fn scored_game(home: &str, away: &str, home_score: i32, away_score: i32) -> Game {
    let mut game = Game::new(home, away).unwrap();
    game.set_score(home_score, away_score).unwrap();
    game
}
