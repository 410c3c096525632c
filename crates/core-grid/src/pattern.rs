//! Built-in banner shown at startup.

pub const BANNER_ROWS: usize = 23;
pub const BANNER_COLS: usize = 67;

/// `%`-art greeting, padded with blank rows so vertical scrolling has room.
pub const BANNER: [&str; BANNER_ROWS] = [
    "                                                                   ",
    "  %            %    %                                %       %     ",
    "  %            %    %                                %       %     ",
    "  %            %    %                                %       %     ",
    "  %            %    %                                %       %     ",
    "  % %%    %%   %    %     %%      %   %   %%   % %   %     %%%     ",
    "  %%  %  %%%%  %    %    %  %     %   %  %  %  %% %  %    %  %     ",
    "  %   %  %     %    %    %  %     % % %  %  %  %     %    %  %     ",
    "  %   %   %%%   %%   %%   %%       % %    %%   %      %%   %%      ",
    "                                                                   ",
    "                                                                   ",
    "                                                                   ",
    "                                                                   ",
    "                                                                   ",
    "                                                                   ",
    "                                                                   ",
    "                                                                   ",
    "                                                                   ",
    "                                                                   ",
    "                                                                   ",
    "                                                                   ",
    "                                                                   ",
    "                                                                   ",
];
