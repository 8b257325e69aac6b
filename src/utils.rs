#[macro_export]
macro_rules! post_funcs {
    ( $( ( $func_name:ident, $url:expr, $request:ty, $response:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[post($url)]
                async fn $func_name(
                    state: web::Data<AppState>,
                    info: web::Json<$request>
                ) -> impl Responder {
                    let response = match [<$func_name _impl>](state, info).await {
                        Ok(response) => response,
                        Err(err) => {
                            tracing::warn!(endpoint = $url, "request failed: {:#}", err);
                            <$response>::err(err.to_string())
                        }
                    };
                    HttpResponse::Ok().json(response)
                }
            }
        )+
    };
}

use anyhow::Context;
use chrono::{NaiveDate, NaiveTime};

const DATE_FMT: &str = "%Y-%m-%d";
const TIME_FMT: &str = "%H:%M";

pub fn parse_date_str<S: AsRef<str>>(s: S) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(s.as_ref(), DATE_FMT).context("Wrong date format")
}

pub fn parse_time_str<S: AsRef<str>>(s: S) -> anyhow::Result<NaiveTime> {
    NaiveTime::parse_from_str(s.as_ref(), TIME_FMT).context("Wrong time format")
}

pub fn format_date_str(date: &NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

pub fn format_time_str(time: &NaiveTime) -> String {
    time.format(TIME_FMT).to_string()
}
