//! Static log corpora used across harnesses.
//!
//! `HEALTH_APP_ROWS` is a trimmed slice of a real HealthApp structured export
//! spanning three days. `HEALTH_APP_CSV` is the same data in export form,
//! including the columns the feeds ignore.

/// `(Time, Content, EventTemplate)` rows, in file order.
pub const HEALTH_APP_ROWS: &[(&str, &str, &str)] = &[
    // 2017-12-23
    ("20171223-22:15:29:606", "onStandStepChanged 3579", "onStandStepChanged <*>"),
    ("20171223-22:15:29:615", "onExtend:1514038530000 14 0 4", "onExtend:<*> <*> <*> <*>"),
    (
        "20171223-22:15:29:633",
        "getTodayTotalDetailSteps = 1514038440000##7007##548365##8661##12361##27173954",
        "getTodayTotalDetailSteps = <*>##<*>##<*>##<*>##<*>##<*>",
    ),
    ("20171223-22:15:29:635", "onReceive action: android.intent.action.SCREEN_ON", "onReceive action: <*>"),
    ("20171223-22:15:29:636", "calculateCaloriesWithCache totalCalories=126775", "calculateCaloriesWithCache totalCalories=<*>"),
    ("20171223-22:15:29:637", "calculateAltitudeWithCache totalAltitude=240", "calculateAltitudeWithCache totalAltitude=<*>"),
    ("20171223-22:16:02:100", "onStandStepChanged 3580", "onStandStepChanged <*>"),
    (
        "20171223-22:16:02:200",
        "getTodayTotalDetailSteps = 1514038560000##7012##548365##8661##12361##27173954",
        "getTodayTotalDetailSteps = <*>##<*>##<*>##<*>##<*>##<*>",
    ),
    ("20171223-22:16:02:300", "calculateCaloriesWithCache totalCalories=126790", "calculateCaloriesWithCache totalCalories=<*>"),
    // 2017-12-24: the first two step readings still carry the previous day's count.
    (
        "20171224-00:00:00:100",
        "getTodayTotalDetailSteps = 1514044800000##7012##548365##8661##12361##27173954",
        "getTodayTotalDetailSteps = <*>##<*>##<*>##<*>##<*>##<*>",
    ),
    (
        "20171224-00:00:01:200",
        "getTodayTotalDetailSteps = 1514044801000##7012##548365##8661##12361##27173954",
        "getTodayTotalDetailSteps = <*>##<*>##<*>##<*>##<*>##<*>",
    ),
    (
        "20171224-00:01:05:000",
        "getTodayTotalDetailSteps = 1514044865000##15##0##0##0##0",
        "getTodayTotalDetailSteps = <*>##<*>##<*>##<*>##<*>##<*>",
    ),
    ("20171224-00:01:06:000", "calculateAltitudeWithCache totalAltitude=242", "calculateAltitudeWithCache totalAltitude=<*>"),
    ("20171224-00:01:07:000", "onStandStepChanged 16", "onStandStepChanged <*>"),
    ("20171224-00:01:08:000", "calculateCaloriesWithCache totalCalories=1200", "calculateCaloriesWithCache totalCalories=<*>"),
    // 2017-12-25
    (
        "20171225-09:30:00:000",
        "getTodayTotalDetailSteps = 1514194200000##420##0##0##0##0",
        "getTodayTotalDetailSteps = <*>##<*>##<*>##<*>##<*>##<*>",
    ),
    ("20171225-09:30:00:500", "onStandStepChanged 1", "onStandStepChanged <1>"),
    ("20171225-09:31:10:000", "calculateAltitudeWithCache totalAltitude=250", "calculateAltitudeWithCache totalAltitude=<*>"),
    ("20171225-09:45:00:000", "onReceive action: android.intent.action.SCREEN_OFF", "onReceive action: <*>"),
];

/// The same rows as a structured CSV export.
pub fn health_app_csv() -> String {
    let mut csv = String::from("LineId,Time,Component,Pid,Content,EventId,EventTemplate\n");
    for (i, (ts, content, template)) in HEALTH_APP_ROWS.iter().enumerate() {
        csv.push_str(&format!(
            "{},{},Step_SPUtils,30002312,\"{}\",E{},\"{}\"\n",
            i + 1,
            ts,
            content,
            i % 7,
            template
        ));
    }
    csv
}
