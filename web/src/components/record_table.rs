//! Admin tables for the three lead collections.  Rows are rendered in the
//! order they are given.

use leptos::prelude::*;

use isocert_common::records::{
    excerpt, table_date, Enquiry, FranchiseApplication, Registration,
};

#[component]
pub fn EnquiryTable(rows: Vec<Enquiry>) -> impl IntoView {
    view! {
        <div class="table-wrap">
            <table class="record-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Service"</th>
                        <th>"Message"</th>
                        <th>"Date"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|enquiry| {
                            let service = enquiry.service_label().to_string();
                            let message = excerpt(&enquiry.message);
                            let date = table_date(&enquiry.created_at);
                            view! {
                                <tr class="enquiry-row">
                                    <td>{enquiry.name}</td>
                                    <td>{enquiry.email}</td>
                                    <td class="muted">{service}</td>
                                    <td class="muted">{message}</td>
                                    <td class="muted">{date}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn RegistrationTable(rows: Vec<Registration>) -> impl IntoView {
    view! {
        <div class="table-wrap">
            <table class="record-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Course"</th>
                        <th>"Country"</th>
                        <th>"Status"</th>
                        <th>"Date"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|reg| {
                            let date = table_date(&reg.created_at);
                            let status = reg.payment_status;
                            view! {
                                <tr class="registration-row">
                                    <td>{reg.name}</td>
                                    <td>{reg.email}</td>
                                    <td class="muted">{reg.course_title}</td>
                                    <td class="muted">{reg.country}</td>
                                    <td>
                                        <span class=status.badge_class()>{status.as_str()}</span>
                                    </td>
                                    <td class="muted">{date}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn FranchiseTable(rows: Vec<FranchiseApplication>) -> impl IntoView {
    view! {
        <div class="table-wrap">
            <table class="record-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Business"</th>
                        <th>"Country"</th>
                        <th>"Experience"</th>
                        <th>"Email"</th>
                        <th>"Status"</th>
                        <th>"Date"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|app| {
                            let date = table_date(&app.created_at);
                            let status = app.status;
                            view! {
                                <tr class="franchise-row">
                                    <td>{app.name}</td>
                                    <td>{app.business_name}</td>
                                    <td class="muted">{app.country}</td>
                                    <td class="muted">{app.experience}</td>
                                    <td class="muted">{app.email}</td>
                                    <td>
                                        <span class=status.badge_class()>{status.as_str()}</span>
                                    </td>
                                    <td class="muted">{date}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
