use leptos::prelude::*;

use crate::components::MemberCount;

const DEMO_URL: &str = "https://demo.nad.fun/demo";

#[component]
pub fn Intro(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <div class=class>
            <div class="relative h-svh">
                <div class="absolute inset-0 h-full bg-nad-gradient"></div>
                <div class="mx-auto h-full max-w-[1440px]">
                    <div class="flex flex-col items-center pt-[70px] *:z-10 xs:pt-[107px]">
                        <p class="mt-[24px] px-[20px] text-center text-body2 text-gray-100 xs:mt-[32px] xs:text-[20px] xs:leading-[150%] xs:tracking-[-0.02em]">
                            "One click token generation & gamefied trading platform on Monad"
                        </p>
                        <a
                            href=DEMO_URL
                            target="_blank"
                            rel="noreferrer noopener"
                            class="relative mt-[48px] flex items-center gap-[12px] overflow-hidden rounded-[48px] border border-white bg-gradient-to-r from-[#FEFEFF] to-[#CFB7FF] bg-clip-text px-[19px] py-[11.5px] text-transparent xs:mt-[64px] xs:px-[32px] xs:py-[16px]"
                        >
                            <div class="absolute inset-0 bg-white/10"></div>
                            <span class="text-subtitle3 xs:text-subtitle1">
                                "Grab GIGA opportunity before launch"
                            </span>
                            <svg
                                class="h-[12px] w-[7px] text-white xs:h-[16px] xs:w-[9px]"
                                aria-hidden="true"
                                xmlns="http://www.w3.org/2000/svg"
                                fill="none"
                                viewBox="0 0 9 16"
                            >
                                <path
                                    stroke="currentColor"
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="m1 1 7 7-7 7"
                                ></path>
                            </svg>
                        </a>
                        <MemberCount class="mt-[20px] text-body4 text-purple-100 xs:text-body2"/>
                    </div>
                </div>
            </div>
        </div>
    }
}
