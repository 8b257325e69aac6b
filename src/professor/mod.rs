mod requests;
mod responses;

use crate::{
    models::{
        appointments::{AppointmentStatus, Decision},
        identities::Identity,
    },
    state::AppState,
    store::{filter_by_status, TransitionOutcome},
};
use actix_web::{post, web, HttpResponse, Responder};
use tracing::debug;

use self::{requests::*, responses::*};

const NO_SUBJECT_MESSAGE: &str =
    "Please contact the administrator to assign a subject to your account.";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(identify)
        .service(view_dashboard)
        .service(search_appoint)
        .service(approve_appoint)
        .service(reject_appoint);
}

crate::post_funcs! {
    (identify, "/identify", Identity, IdentifyResponse),
    (view_dashboard, "/view_dashboard", ViewDashboardRequest, ViewDashboardResponse),
    (search_appoint, "/search_appoint", SearchAppointRequest, SearchAppointResponse),
    (approve_appoint, "/approve_appoint", DecideAppointRequest, DecideAppointResponse),
    (reject_appoint, "/reject_appoint", DecideAppointRequest, DecideAppointResponse),
}

async fn identify_impl(
    state: web::Data<AppState>,
    info: web::Json<Identity>,
) -> anyhow::Result<IdentifyResponse> {
    let (reseeded, count) = state.identify(info.into_inner())?;

    Ok(IdentifyResponse {
        success: true,
        err: "".to_string(),
        reseeded,
        count,
    })
}

async fn view_dashboard_impl(
    state: web::Data<AppState>,
    _info: web::Json<ViewDashboardRequest>,
) -> anyhow::Result<ViewDashboardResponse> {
    let store = state.get_store()?;

    let subject = match store.identity().subject() {
        Some(subject) => subject.to_string(),
        None => {
            return Ok(ViewDashboardResponse {
                success: true,
                message: NO_SUBJECT_MESSAGE.to_string(),
                ..Default::default()
            })
        }
    };

    let visible = store.visible();
    let summary = store.summary();
    debug!(%subject, total = summary.total, pending = summary.pending, "dashboard viewed");

    let pending = filter_by_status(visible.iter().copied(), AppointmentStatus::Pending)
        .into_iter()
        .map(AppointItem::from)
        .collect();
    let appointments = visible.into_iter().map(AppointItem::from).collect();

    Ok(ViewDashboardResponse {
        success: true,
        err: "".to_string(),
        message: if summary.total == 0 {
            format!("No appointment requests for {} yet.", subject)
        } else {
            "".to_string()
        },
        subject,
        subject_assigned: true,
        summary,
        pending,
        appointments,
    })
}

async fn search_appoint_impl(
    state: web::Data<AppState>,
    info: web::Json<SearchAppointRequest>,
) -> anyhow::Result<SearchAppointResponse> {
    let info = info.into_inner();
    let store = state.get_store()?;

    let visible = store.visible();
    let appointments = match info.status {
        Some(status) => filter_by_status(visible, status),
        None => visible,
    };

    Ok(SearchAppointResponse {
        success: true,
        err: "".to_string(),
        appointments: appointments.into_iter().map(AppointItem::from).collect(),
    })
}

async fn approve_appoint_impl(
    state: web::Data<AppState>,
    info: web::Json<DecideAppointRequest>,
) -> anyhow::Result<DecideAppointResponse> {
    decide(&state, &info.appointment_id, Decision::Approve)
}

async fn reject_appoint_impl(
    state: web::Data<AppState>,
    info: web::Json<DecideAppointRequest>,
) -> anyhow::Result<DecideAppointResponse> {
    decide(&state, &info.appointment_id, Decision::Reject)
}

fn decide(
    state: &AppState,
    appointment_id: &str,
    decision: Decision,
) -> anyhow::Result<DecideAppointResponse> {
    let mut store = state.get_store_mut()?;
    let outcome = store.decide(appointment_id, decision)?;

    Ok(DecideAppointResponse {
        success: true,
        err: "".to_string(),
        applied: outcome == TransitionOutcome::Applied,
    })
}
