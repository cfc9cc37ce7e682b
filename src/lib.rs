pub mod clock;
pub mod configuration;
pub mod dateerror;
pub mod dateutils;

pub mod time {
    pub mod utility;
    pub mod period;
    pub mod calendardate;
    pub mod rangeofdates;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod weekendadjustment;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod lastweekdayholiday;
        pub mod easterrelatedholiday;
    }

    pub mod holiday {
        pub mod holidaypolicy;
        pub mod holidaysource;
    }
}
