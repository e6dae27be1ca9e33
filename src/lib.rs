pub mod calendarerror;

pub mod configuration;

pub mod feed {
    pub mod icalendar;
    pub mod feedcache;
}

pub mod time {
    pub mod utility;
    pub mod weekdayrule;
    pub mod easter;
    pub mod rangeofdates;
    pub mod schoolyear;

    pub mod schoolholiday {
        pub mod holidayentry;
        pub mod schoolholiday;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod easterrelatedholiday;
        pub mod weekdayonorbeforeholiday;
        pub mod springbreakholiday;
    }

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod winterbreaktable;
        pub mod holidayset;
    }

    pub mod schedule {
        pub mod schoolschedule;
    }
}
