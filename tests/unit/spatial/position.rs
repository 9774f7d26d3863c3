//! Tests for headings and cell coordinates

#[cfg(test)]
mod tests {
    use hurdlebot::spatial::{Direction, Position};

    // Tests opposite is an involution and never maps a heading to itself
    // Verified by swapping East and North in opposite
    #[test]
    fn test_opposite_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
        assert_eq!(Direction::South.opposite(), Direction::North);
        assert_eq!(Direction::East.opposite(), Direction::West);
    }

    // Tests derived ordering follows the default priority order
    // Verified by reordering the enum variants
    #[test]
    fn test_direction_ordering() {
        let mut shuffled = [
            Direction::West,
            Direction::North,
            Direction::South,
            Direction::East,
        ];
        shuffled.sort();
        assert_eq!(shuffled, Direction::ALL);

        for (expected, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(direction.index(), expected);
        }
    }

    // Tests report names are upper case compass words
    // Verified by returning lower case names
    #[test]
    fn test_direction_names() {
        let names: Vec<String> = Direction::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["SOUTH", "EAST", "NORTH", "WEST"]);
    }

    // Tests offsets move one cell and saturate at zero
    // Verified by using wrapping subtraction for North
    #[test]
    fn test_offset_saturates() {
        let origin = Position::new(3, 4);
        assert_eq!(origin.offset(Direction::South), Position::new(4, 4));
        assert_eq!(origin.offset(Direction::East), Position::new(3, 5));
        assert_eq!(origin.offset(Direction::North), Position::new(2, 4));
        assert_eq!(origin.offset(Direction::West), Position::new(3, 3));

        let corner = Position::new(0, 0);
        assert_eq!(corner.offset(Direction::North), corner);
        assert_eq!(corner.offset(Direction::West), corner);

        let far = Position::new(usize::MAX, usize::MAX);
        assert_eq!(far.offset(Direction::South), far);
        assert_eq!(far.offset(Direction::East), far);
    }

    // Tests position formatting used in error messages
    // Verified by swapping row and column in Display
    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(6, 1).to_string(), "(6, 1)");
    }
}
