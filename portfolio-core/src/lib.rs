//! Logic lõi cho trang portfolio: mô hình dữ liệu và trạng thái UI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cấu hình điều chỉnh tốc độ marquee và các ngưỡng hiển thị.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioConfig {
    /// Tốc độ trượt của dải dự án (px mỗi giây).
    pub marquee_speed_px_per_sec: f64,
    /// Tỷ lệ hiển thị tối thiểu để marquee bắt đầu chạy.
    pub marquee_view_threshold: f64,
    /// Ngưỡng giao cắt viewport để thanh kỹ năng hiện hiệu ứng.
    pub reveal_threshold: f64,
    /// Chạy lại hiệu ứng thanh kỹ năng mỗi lần cuộn quay lại.
    pub reveal_reset_on_exit: bool,
    /// Kích thước icon di chuyển dọc timeline (px).
    pub traveler_icon_px: f64,
    /// Kích thước chấm đánh dấu trên timeline (px).
    pub marker_dot_px: f64,
    /// Độ trễ "đang suy nghĩ" tối thiểu của trợ lý (ms).
    pub reply_delay_min_ms: u32,
    /// Độ trễ "đang suy nghĩ" tối đa của trợ lý (ms).
    pub reply_delay_max_ms: u32,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            marquee_speed_px_per_sec: 36.0,
            marquee_view_threshold: 0.2,
            reveal_threshold: 0.35,
            reveal_reset_on_exit: true,
            traveler_icon_px: 24.0,
            marker_dot_px: 16.0,
            reply_delay_min_ms: 400,
            reply_delay_max_ms: 900,
        }
    }
}

/// Hồ sơ tĩnh của chủ trang, nạp một lần lúc khởi động.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub tools: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub brands: Vec<Brand>,
    #[serde(default)]
    pub socials: SocialLinks,
}

/// Một kỹ năng hoặc công cụ kèm mức thành thạo (0-100).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Skill {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: u8,
}

/// Một dự án trong dải trượt.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub live_url: String,
    pub technologies: Vec<String>,
}

/// Một mục kinh nghiệm làm việc.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Experience {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub description: String,
}

/// Một mục học vấn.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Education {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub description: String,
}

/// Thương hiệu từng hợp tác, hiện trong thẻ nổi của hero.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Brand {
    #[serde(default)]
    pub name: String,
}

/// Liên kết mạng xã hội; thiếu mục nào thì bỏ qua mục đó.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SocialLinks {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub stackoverflow: Option<String>,
    #[serde(default)]
    pub quora: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Bên gửi một tin nhắn trong hộp chat.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    Visitor,
    Assistant,
}

/// Một tin nhắn trong phiên chat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, text: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            role,
            text: text.into(),
            sent_at,
        }
    }
}

/// Bản ghi hội thoại trong bộ nhớ, chỉ thêm vào, mất khi tải lại trang.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Khởi tạo với lời chào của trợ lý.
    pub fn with_greeting(greeting: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            messages: vec![ChatMessage::new(ChatRole::Assistant, greeting, now)],
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Danh sách tin nhắn theo thứ tự gửi.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Tiến độ cuộn của một section: tâm viewport đã đi qua bao nhiêu phần
/// chiều cao container, kẹp trong [0, 1].
pub fn section_progress(container_top: f64, container_height: f64, viewport_height: f64) -> f64 {
    if container_height <= 0.0 {
        return 0.0;
    }
    ((viewport_height / 2.0 - container_top) / container_height).clamp(0.0, 1.0)
}

/// Đoạn thẳng nối chấm đầu và chấm cuối của timeline, dùng để nội suy
/// vị trí icon di chuyển.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelerTrack {
    first_center: f64,
    last_center: f64,
    icon_size: f64,
}

impl TravelerTrack {
    /// Dựng track từ offset đỉnh của các chấm đánh dấu. Không có chấm nào
    /// thì trả `None` và bên gọi giữ nguyên vị trí cũ.
    pub fn from_markers(marker_tops: &[f64], dot_size: f64, icon_size: f64) -> Option<Self> {
        let first = marker_tops.first()?;
        let last = marker_tops.last()?;
        Some(Self {
            first_center: first + dot_size / 2.0,
            last_center: last + dot_size / 2.0,
            icon_size,
        })
    }

    /// Chiều dài đoạn track, không âm.
    pub fn length(&self) -> f64 {
        (self.last_center - self.first_center).max(0.0)
    }

    /// Offset đỉnh của icon ứng với tiến độ đã cho: nội suy tâm icon dọc
    /// track rồi trừ nửa kích thước icon, sàn tại 0.
    pub fn icon_top(&self, progress: f64) -> f64 {
        let center = self.first_center + progress.clamp(0.0, 1.0) * self.length();
        (center - self.icon_size / 2.0).max(0.0)
    }
}

/// Chặn trên cho delta một frame (ms); tab nền quay lại không làm dải nhảy vọt.
const MAX_FRAME_MS: f64 = 100.0;

/// Trạng thái dải dự án trượt ngang: hai bản sao nội dung nối đuôi nhau,
/// offset quay về 0 khi chạm nửa chiều rộng để tạo vòng lặp liền mạch.
#[derive(Debug, Clone, PartialEq)]
pub struct MarqueeState {
    offset: f64,
    half_width: f64,
    in_view: bool,
    held: bool,
    speed_px_per_sec: f64,
}

impl MarqueeState {
    pub fn new(speed_px_per_sec: f64) -> Self {
        Self {
            offset: 0.0,
            half_width: 0.0,
            in_view: false,
            held: false,
            speed_px_per_sec,
        }
    }

    /// Cập nhật nửa chiều rộng đo lại (resize, ảnh nạp muộn). Offset cũ
    /// vượt quá mốc mới sẽ quay về 0.
    pub fn set_half_width(&mut self, half_width: f64) {
        self.half_width = half_width.max(0.0);
        if self.half_width <= 0.0 || self.offset >= self.half_width {
            self.offset = 0.0;
        }
    }

    pub fn set_in_view(&mut self, in_view: bool) {
        self.in_view = in_view;
    }

    /// Giữ dải đứng yên khi hover/chạm; thả ra chạy tiếp từ chỗ đang dừng.
    pub fn set_held(&mut self, held: bool) {
        self.held = held;
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Tiến offset theo thời gian trôi qua của frame; chỉ chạy khi dải
    /// trong viewport và không bị giữ. Trả offset sau khi cập nhật.
    pub fn advance(&mut self, elapsed_ms: f64) -> f64 {
        if self.in_view && !self.held && self.half_width > 0.0 {
            let elapsed = elapsed_ms.clamp(0.0, MAX_FRAME_MS);
            self.offset += self.speed_px_per_sec * elapsed / 1000.0;
            if self.offset >= self.half_width {
                self.offset = 0.0;
            }
        }
        self.offset
    }

    /// Giá trị translateX cần ghi vào style của dải.
    pub fn translate(&self) -> f64 {
        -self.offset
    }
}

/// Nhân đôi danh sách mục để dải trượt khép kín không lộ mép.
pub fn duplicate_for_loop<T: Clone>(items: &[T]) -> Vec<T> {
    let mut doubled = Vec::with_capacity(items.len() * 2);
    doubled.extend_from_slice(items);
    doubled.extend_from_slice(items);
    doubled
}

/// Cờ hiển thị của một thanh tiến độ, bật khi phần tử giao cắt viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealState {
    visible: bool,
    reset_on_exit: bool,
}

impl RevealState {
    pub fn new(reset_on_exit: bool) -> Self {
        Self {
            visible: false,
            reset_on_exit,
        }
    }

    /// Nhận kết quả quan sát giao cắt mới nhất. Trả `true` nếu cờ đổi.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        let next = if intersecting {
            true
        } else if self.reset_on_exit {
            false
        } else {
            self.visible
        };
        let changed = next != self.visible;
        self.visible = next;
        changed
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Độ rộng fill (%) ứng với mức kỹ năng: 0 khi ẩn, `level` khi hiện.
    pub fn fill_percent(&self, level: u8) -> u8 {
        if self.visible {
            level
        } else {
            0
        }
    }
}

/// Lỗi chung của bộ portfolio.
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    #[error("Dữ liệu hồ sơ thiếu thông tin tối thiểu")]
    MissingData,
    #[error("Không đọc được dữ liệu: {0}")]
    Parse(String),
    #[error("Lỗi khác: {0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_progress_is_clamped() {
        assert_eq!(section_progress(10_000.0, 500.0, 800.0), 0.0);
        assert_eq!(section_progress(-10_000.0, 500.0, 800.0), 1.0);
        let mid = section_progress(150.0, 500.0, 800.0);
        assert!(mid > 0.0 && mid < 1.0);
    }

    #[test]
    fn section_progress_handles_degenerate_height() {
        assert_eq!(section_progress(100.0, 0.0, 800.0), 0.0);
        assert_eq!(section_progress(100.0, -5.0, 800.0), 0.0);
    }

    #[test]
    fn traveler_track_requires_markers() {
        assert!(TravelerTrack::from_markers(&[], 16.0, 24.0).is_none());
    }

    #[test]
    fn traveler_icon_top_is_monotonic_and_non_negative() {
        let track = TravelerTrack::from_markers(&[0.0, 120.0, 300.0], 16.0, 24.0)
            .expect("track với ba chấm");
        let mut previous = -1.0;
        for step in 0..=10 {
            let top = track.icon_top(step as f64 / 10.0);
            assert!(top >= 0.0);
            assert!(top >= previous);
            previous = top;
        }
    }

    #[test]
    fn traveler_icon_top_floors_at_zero() {
        // Chấm đầu sát mép trên: tâm icon trừ nửa kích thước sẽ âm nếu không sàn.
        let track =
            TravelerTrack::from_markers(&[0.0, 50.0], 16.0, 24.0).expect("track hai chấm");
        assert_eq!(track.icon_top(0.0), 0.0);
    }

    #[test]
    fn traveler_single_marker_has_zero_length_track() {
        let track = TravelerTrack::from_markers(&[40.0], 16.0, 24.0).expect("track một chấm");
        assert_eq!(track.length(), 0.0);
        assert_eq!(track.icon_top(0.0), track.icon_top(1.0));
    }

    fn running_marquee() -> MarqueeState {
        let mut state = MarqueeState::new(60.0);
        state.set_half_width(100.0);
        state.set_in_view(true);
        state
    }

    #[test]
    fn marquee_advances_only_in_view() {
        let mut state = MarqueeState::new(60.0);
        state.set_half_width(100.0);
        assert_eq!(state.advance(16.0), 0.0);
        state.set_in_view(true);
        assert!(state.advance(16.0) > 0.0);
    }

    #[test]
    fn marquee_wraps_to_exact_zero() {
        let mut state = running_marquee();
        let mut wrapped = false;
        for _ in 0..2_000 {
            let before = state.offset();
            let after = state.advance(16.67);
            if after < before {
                assert_eq!(after, 0.0);
                wrapped = true;
                break;
            }
        }
        assert!(wrapped, "marquee phải quay vòng ít nhất một lần");
    }

    #[test]
    fn marquee_offset_stays_in_range() {
        let mut state = running_marquee();
        for _ in 0..5_000 {
            let offset = state.advance(16.67);
            assert!((0.0..100.0).contains(&offset));
        }
    }

    #[test]
    fn marquee_hold_pauses_and_resumes_from_same_offset() {
        let mut state = running_marquee();
        state.advance(500.0);
        let paused_at = state.offset();
        assert!(paused_at > 0.0);

        state.set_held(true);
        assert_eq!(state.advance(16.67), paused_at);
        assert_eq!(state.advance(16.67), paused_at);

        state.set_held(false);
        assert!(state.advance(16.67) > paused_at);
    }

    #[test]
    fn marquee_clamps_runaway_frame_delta() {
        let mut state = running_marquee();
        // Frame 10 giây (tab nền) chỉ được tính như MAX_FRAME_MS.
        let offset = state.advance(10_000.0);
        assert!(offset <= 60.0 * MAX_FRAME_MS / 1000.0);
    }

    #[test]
    fn marquee_remeasure_reclamps_stale_offset() {
        let mut state = running_marquee();
        state.advance(900.0);
        assert!(state.offset() > 0.0);
        state.set_half_width(state.offset() / 2.0);
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn duplicate_for_loop_doubles_items() {
        let doubled = duplicate_for_loop(&["a", "b", "c"]);
        assert_eq!(doubled.len(), 6);
        assert_eq!(doubled[0..3], doubled[3..6]);
    }

    #[test]
    fn reveal_resets_on_exit_when_configured() {
        let mut state = RevealState::new(true);
        assert!(state.observe(true));
        assert!(state.is_visible());
        assert!(state.observe(false));
        assert!(!state.is_visible());
        assert!(state.observe(true));
        assert!(state.is_visible());
    }

    #[test]
    fn reveal_is_sticky_without_reset() {
        let mut state = RevealState::new(false);
        assert!(state.observe(true));
        assert!(!state.observe(false));
        assert!(state.is_visible());
    }

    #[test]
    fn reveal_fill_percent_follows_flag() {
        let mut state = RevealState::new(true);
        assert_eq!(state.fill_percent(85), 0);
        state.observe(true);
        assert_eq!(state.fill_percent(85), 85);
    }

    #[test]
    fn transcript_is_append_only_and_seeded() {
        let now = Utc::now();
        let mut transcript = Transcript::with_greeting("Xin chào!", now);
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].role, ChatRole::Assistant);

        transcript.push(ChatMessage::new(ChatRole::Visitor, "hello", now));
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[1].role, ChatRole::Visitor);
    }
}
