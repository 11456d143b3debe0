//! Admin overview page: headline cards, charts, calendar, announcements.

use leptos::prelude::*;

use crate::components::announcements::Announcements;
use crate::components::charts::attendance::AttendanceChartContainer;
use crate::components::charts::count::CountChartContainer;
use crate::components::charts::finance::FinanceChart;
use crate::components::event_list::EventCalendarContainer;
use crate::components::user_card::UserCard;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <div class="admin-page">
            <div class="admin-page__main">
                <div class="admin-page__cards">
                    <UserCard label="Students"/>
                    <UserCard label="Teachers"/>
                    <UserCard label="Parents"/>
                    <UserCard label="Staff"/>
                </div>
                <div class="admin-page__charts">
                    <CountChartContainer/>
                    <AttendanceChartContainer/>
                </div>
                <FinanceChart/>
            </div>
            <div class="admin-page__side">
                <EventCalendarContainer/>
                <Announcements/>
            </div>
        </div>
    }
}
