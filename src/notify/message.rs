//! Announcement and report templates.
//!
//! Pure string building, no I/O. The announcement keeps the channel's
//! fixed three-language layout (Kurdish, English, Arabic) with RTL marks
//! so the Telegram client renders the mixed-direction lines correctly.

use crate::store::Job;

/// Right-to-left mark, required before `#` so hashtags render inline
/// within RTL text.
const RLM: char = '\u{200f}';

/// Build the channel announcement for one job posting.
pub fn announcement(job: &Job) -> String {
    let location_tag = job.location.replace(' ', "");
    let hashtags = format!(
        "\n\n{RLM}#{RLM}{tag} #{RLM}Hiring #{RLM}Vacancy #{RLM}JobsIn{tag}",
        tag = location_tag
    );

    format!(
        "{RLM}هەلی کار بۆ ئێوە لە شاری {location}!\n\n\
         {company} پێویستی بە کارمەند هەیە بۆ {title} بۆ ئەوەی ببێت بە بەشێک لە تیمەکە.\n\
         📍{location}\n\
         بۆ پێشکەشکردن و زانیاری زیاتر تکایە سەردانی ماڵپەری JOBS KRD بکەن\n\n\
         ____\n\n\
         {company} is looking for a {title} to join the team\n\
         📍{location}\n\
         Interested candidates can register and apply through JOBS KRD website\n\n\
         ____\n\n\
         {RLM}{company} تبحث عن موظفة لمنصب {arabic_title} للانضمام إلى الفريق.\n\
         📍{location}\n\
         يمكن للمرشحات المهتمات التسجيل والتقديم من خلال موقع JOBS KR{hashtags}",
        location = job.location,
        company = job.company,
        title = job.title,
        arabic_title = job.arabic_job_title,
        hashtags = hashtags,
    )
}

/// Build the daily report body over the scheduled queue, one line per job.
pub fn daily_report(jobs: &[&Job]) -> String {
    let mut report = String::from("Daily Job Posting Report:\n\n");
    for job in jobs {
        let posted_at = job
            .scheduled_time
            .map(|t| t.to_rfc3339())
            .unwrap_or_default();
        report.push_str(&format!(
            "- Job: '{}' for '{}' was posted at {}\n",
            job.title, job.company, posted_at
        ));
    }
    report
}
