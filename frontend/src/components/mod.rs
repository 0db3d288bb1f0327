pub mod booking_panel;
pub mod bookings_page;
pub mod login_form;
pub mod my_bookings;
pub mod public_bookings_page;
pub mod week_calendar;
pub mod week_nav;

pub use bookings_page::BookingsPage;
pub use login_form::LoginForm;
pub use my_bookings::MyBookings;
pub use public_bookings_page::PublicBookingsPage;
