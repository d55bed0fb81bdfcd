pub(crate) mod dashboard;

pub(crate) struct Widgets {
    pub(crate) dashboard: dashboard::DashboardWidget,
}
