//! # Help Text
//!
//! Help message for bot commands.
//! Displayed to the user via the `/help` command.

pub const MAIN: &str = concat!(
    "Facility status bot\n",
    "\n",
    "/start - show current occupancy\n",
    "/status - show current occupancy\n",
    "/set <facility_id> <count> - update occupancy (admin only)\n",
    "/help - this message\n",
);
