use crate::models::Player;

pub(super) fn default_roster() -> Vec<Player> {
    vec![
        Player::new(1, "Rohit Sharma", "Batsman", "India", 37),
        Player::new(2, "Virat Kohli", "Batsman", "India", 36),
        Player::new(3, "Shubman Gill", "Batsman", "India", 25),
        Player::new(4, "Shreyas Iyer", "Batsman", "India", 30),
        Player::new(5, "KL Rahul", "Wicket-keeper", "India", 32),
        Player::new(6, "Rishabh Pant", "Wicket-keeper", "India", 27),
        Player::new(7, "Hardik Pandya", "All-rounder", "India", 31),
        Player::new(8, "Ravindra Jadeja", "All-rounder", "India", 36),
        Player::new(9, "Axar Patel", "All-rounder", "India", 31),
        Player::new(10, "Jasprit Bumrah", "Bowler", "India", 31),
        Player::new(11, "Mohammed Shami", "Bowler", "India", 34),
        Player::new(12, "Kuldeep Yadav", "Bowler", "India", 30),
        Player::new(13, "Mohammed Siraj", "Bowler", "India", 31),
        Player::new(14, "Arshdeep Singh", "Bowler", "India", 26),
        Player::new(15, "Yashasvi Jaiswal", "Batsman", "India", 23),
    ]
}
