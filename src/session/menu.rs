//! Main menu options

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    AddExpenses,
    ViewExpenses,
    ViewCategoryTotals,
    ViewGrandTotal,
    SaveAndExit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 5] = [
        MenuOption::AddExpenses,
        MenuOption::ViewExpenses,
        MenuOption::ViewCategoryTotals,
        MenuOption::ViewGrandTotal,
        MenuOption::SaveAndExit,
    ];

    /// Parse the user's answer; anything but 1-5 is `None`
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim() {
            "1" => Some(MenuOption::AddExpenses),
            "2" => Some(MenuOption::ViewExpenses),
            "3" => Some(MenuOption::ViewCategoryTotals),
            "4" => Some(MenuOption::ViewGrandTotal),
            "5" => Some(MenuOption::SaveAndExit),
            _ => None,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            MenuOption::AddExpenses => 1,
            MenuOption::ViewExpenses => 2,
            MenuOption::ViewCategoryTotals => 3,
            MenuOption::ViewGrandTotal => 4,
            MenuOption::SaveAndExit => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::AddExpenses => "Add more expenses",
            MenuOption::ViewExpenses => "View all expenses",
            MenuOption::ViewCategoryTotals => "View total spending by category",
            MenuOption::ViewGrandTotal => "View total spending across all categories",
            MenuOption::SaveAndExit => "Exit and save",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_numbers() {
        for option in MenuOption::ALL {
            assert_eq!(MenuOption::parse(&option.number().to_string()), Some(option));
        }
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        assert_eq!(MenuOption::parse("0"), None);
        assert_eq!(MenuOption::parse("6"), None);
        assert_eq!(MenuOption::parse("two"), None);
        assert_eq!(MenuOption::parse(""), None);
        assert_eq!(MenuOption::parse(" 3 "), Some(MenuOption::ViewCategoryTotals));
    }
}
