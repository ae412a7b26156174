use clap::{Parser, Subcommand};

/// --prev/--next 최대 이동 개월 수
pub const MAX_MONTH_SHIFT: i64 = 1200;

#[derive(Parser)]
#[command(name = "concert-pages")]
#[command(about = "공연 캘린더・홈・스탬프 페이지 터미널 클라이언트", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 상세 로그 출력（-vv 로 디버그）
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 공연 캘린더
    Calendar {
        /// 표시할 달（YYYY-MM, 기본: 이번 달）
        #[arg(short, long)]
        month: Option<String>,

        /// 선택할 날짜（YYYY-MM-DD, 기본: 오늘）
        #[arg(short, long)]
        date: Option<String>,

        /// 지역 필터（여러 번 지정 가능, 같은 지역을 두 번 주면 해제）
        #[arg(short, long = "region")]
        regions: Vec<String>,

        /// 이전 달로 이동
        #[arg(
            long,
            default_value_t = 0,
            conflicts_with = "next",
            value_parser = clap::value_parser!(u32).range(0..=MAX_MONTH_SHIFT)
        )]
        prev: u32,

        /// 다음 달로 이동
        #[arg(
            long,
            default_value_t = 0,
            value_parser = clap::value_parser!(u32).range(0..=MAX_MONTH_SHIFT)
        )]
        next: u32,
    },

    /// 홈（오늘・최근・티켓 오픈・추천 공연）
    Home,

    /// 스탬프
    Stamps {
        #[command(subcommand)]
        action: StampAction,
    },

    /// 설정
    Config {
        /// API 서버 주소 설정
        #[arg(long)]
        set_base_url: Option<String>,

        /// 액세스 토큰 설정
        #[arg(long)]
        set_token: Option<String>,

        /// 액세스 토큰 삭제
        #[arg(long, conflicts_with = "set_token")]
        clear_token: bool,

        /// 현재 설정 표시
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand)]
pub enum StampAction {
    /// 수집한 스탬프 목록
    List {
        #[arg(long)]
        start_year: Option<i32>,

        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        start_month: Option<u32>,

        #[arg(long)]
        end_year: Option<i32>,

        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        end_month: Option<u32>,
    },

    /// 스탬프 찍기（대화형）
    Collect,

    /// 수집한 스탬프 상세
    Detail {
        /// 스탬프 id
        id: i64,
    },
}
